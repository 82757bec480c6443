//! Draw-Controller: übersetzt rohe Pointer-/Tastatur-Eingaben in Platzierungs-Events.

use super::event_bus::{DrawEventBus, SubscriptionId};
use super::events::{
    DrawEvent, DrawEventKind, InputEvent, InputResponse, KeyInput, Modifiers, PlacementTarget,
    PointerInput,
};
use super::gesture::{ClickThresholds, GestureOutcome, GestureTracker};
use super::hints::SharedHintRegistry;
use super::host::{DrawContext, HostSurface, Overlay};
use super::hover::HoverTracker;
use super::keymap::{DrawAction, DrawKeymap};
use super::session::DrawSession;
use super::targets::resolve_targets;
use crate::core::{choose_edge, FeatureRef, ScreenPoint};
use crate::shared::DrawOptions;

/// Zeichen-Verhalten einer Kartenfläche.
///
/// Besitzt den transienten Zeichen-Zustand (`DrawSession`, laufende Geste,
/// Doppelklick-Sperre) und verteilt die erzeugten `DrawEvent`s über den
/// eigenen `DrawEventBus`. Alle Host-Fähigkeiten kommen pro Aufruf über
/// den `DrawContext`.
pub struct DrawController {
    options: DrawOptions,
    thresholds: ClickThresholds,
    keymap: DrawKeymap,
    hints: SharedHintRegistry,
    tail_text: Option<String>,
    tail_installed: bool,
    session: DrawSession,
    gesture: GestureTracker,
    hover: HoverTracker,
    events: DrawEventBus,
    active: bool,
    orthogonal_indicator: bool,
    /// Zeitpunkt (ms), ab dem native Doppelklicks wieder erlaubt sind
    double_click_block_until: Option<u64>,
}

impl DrawController {
    /// Erstellt einen inaktiven Controller.
    pub fn new(options: DrawOptions, hints: SharedHintRegistry) -> Self {
        Self {
            thresholds: ClickThresholds::from_options(&options),
            options,
            keymap: DrawKeymap::default(),
            hints,
            tail_text: None,
            tail_installed: false,
            session: DrawSession::new(),
            gesture: GestureTracker::new(),
            hover: HoverTracker::new(),
            events: DrawEventBus::new(),
            active: false,
            orthogonal_indicator: false,
            double_click_block_until: None,
        }
    }

    /// Ersetzt die Tastenbelegung.
    pub fn with_keymap(mut self, keymap: DrawKeymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Setzt den Hinweistext, der beim Aktivieren angezeigt wird.
    pub fn set_tail(&mut self, text: impl Into<String>) {
        self.tail_text = Some(text.into());
    }

    /// Aktueller Hinweistext.
    pub fn tail(&self) -> Option<&str> {
        self.tail_text.as_deref()
    }

    /// Aktive Optionen.
    pub fn options(&self) -> &DrawOptions {
        &self.options
    }

    /// Aktive Tastenbelegung.
    pub fn keymap(&self) -> &DrawKeymap {
        &self.keymap
    }

    /// Laufende Zeichen-Sitzung.
    pub fn session(&self) -> &DrawSession {
        &self.session
    }

    /// Ist das Verhalten an eine Fläche gebunden?
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Läuft gerade ein Press/Release-Zyklus?
    pub fn is_pressed(&self) -> bool {
        self.gesture.is_pressed()
    }

    /// Registriert einen Callback für einen Event-Kanal.
    pub fn subscribe(
        &mut self,
        kind: DrawEventKind,
        callback: impl FnMut(&DrawEvent) + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(kind, callback)
    }

    /// Bisher emittierte Events.
    pub fn events(&self) -> &DrawEventBus {
        &self.events
    }

    /// Entnimmt alle bisher emittierten Events.
    pub fn drain_events(&mut self) -> Vec<DrawEvent> {
        self.events.drain()
    }

    /// Werden native Klicks zum Zeitpunkt `now_ms` noch unterdrückt?
    pub fn blocks_native_click(&self, now_ms: u64) -> bool {
        self.double_click_block_until
            .is_some_and(|deadline| now_ms < deadline)
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Bindet das Verhalten an die Fläche: Hover, Edit-Darstellung und ggf. Hinweistext.
    ///
    /// `modifiers` ist der Modifier-Zustand beim Aktivieren (Shift → Orthogonal-Hinweis).
    pub fn activate(&mut self, ctx: &mut DrawContext<'_>, modifiers: Modifiers) {
        if self.active {
            log::warn!("Draw-Verhalten ist bereits aktiv");
            return;
        }

        ctx.surface.install_overlay(&Overlay::Hover);
        ctx.surface.install_overlay(&Overlay::Edit);

        self.tail_installed = false;
        if let Some(text) = self.tail_text.as_deref() {
            if !ctx.surface.in_intro() && !self.hints.borrow().is_used(text) {
                ctx.surface.install_overlay(&Overlay::Tail(text.to_owned()));
                self.tail_installed = true;
            }
        }

        if modifiers.shift {
            self.set_orthogonal_indicator(true, ctx.surface);
        }

        self.active = true;
        log::info!("Draw-Verhalten aktiviert (Modus {:?})", ctx.mode);
    }

    /// Löst das Verhalten von der Fläche und räumt alle transienten Zustände auf.
    pub fn deactivate(&mut self, ctx: &mut DrawContext<'_>) {
        if !self.active {
            return;
        }

        ctx.surface.uninstall_overlay(&Overlay::Hover);
        ctx.surface.uninstall_overlay(&Overlay::Edit);

        if self.tail_installed {
            if let Some(text) = self.tail_text.as_deref() {
                ctx.surface.uninstall_overlay(&Overlay::Tail(text.to_owned()));
                self.hints.borrow_mut().mark_used(text);
            }
            self.tail_installed = false;
        }

        self.set_orthogonal_indicator(false, ctx.surface);
        if self.double_click_block_until.take().is_some() {
            ctx.surface.set_double_click_enabled(true);
        }

        self.hover.clear(ctx.surface);
        self.gesture.reset();
        self.session.reset();
        self.active = false;
        log::info!("Draw-Verhalten deaktiviert");
    }

    // ── Eingaben ────────────────────────────────────────────────

    /// Verarbeitet ein Host-Event und meldet, wie der Host es weiter behandeln soll.
    ///
    /// Im inaktiven Zustand werden alle Events durchgereicht.
    pub fn handle_input(&mut self, ctx: &mut DrawContext<'_>, input: InputEvent) -> InputResponse {
        if !self.active {
            return InputResponse::PASS;
        }

        self.expire_double_click_block(input.time_ms(), ctx.surface);

        match input {
            InputEvent::PointerDown(pointer) => self.on_pointer_down(ctx, &pointer),
            InputEvent::PointerMove(pointer) => self.on_pointer_move(ctx, &pointer),
            InputEvent::PointerUp(pointer) => self.on_pointer_up(ctx, &pointer),
            InputEvent::KeyDown(key) => self.on_key_down(ctx, &key),
            InputEvent::KeyUp(key) => self.on_key_up(ctx, &key),
            InputEvent::NativeClick { time_ms } => {
                if self.blocks_native_click(time_ms) {
                    InputResponse::STOP_PROPAGATION
                } else {
                    InputResponse::PASS
                }
            }
            InputEvent::Tick { .. } => InputResponse::PASS,
        }
    }

    /// Platzierungsziele an einer Pointer-Position (z.B. für eine Vorschau).
    pub fn targets_at(
        &self,
        ctx: &DrawContext<'_>,
        pointer: ScreenPoint,
        modifiers: Modifiers,
    ) -> Vec<PlacementTarget> {
        resolve_targets(pointer, modifiers, &self.session, ctx.features, ctx.projection)
    }

    fn on_pointer_down(&mut self, ctx: &mut DrawContext<'_>, pointer: &PointerInput) -> InputResponse {
        if pointer.modifiers.shift && ctx.mode.allows_orthogonal() {
            // Shift-Klick: sofort platzieren, keine Klick-Erkennung
            self.session.enter_orthogonal();
            self.emit_click(ctx, pointer.position, pointer.modifiers);
            return InputResponse::CONSUME;
        }

        self.gesture.press(pointer);
        InputResponse::PASS
    }

    fn on_pointer_move(&mut self, ctx: &mut DrawContext<'_>, pointer: &PointerInput) -> InputResponse {
        // Während eines Drucks ist noch unklar, ob Klick oder Drag
        if self.gesture.is_pressed() {
            return InputResponse::PASS;
        }

        let targets = self.targets_at(ctx, pointer.position, pointer.modifiers);
        let under_pointer = targets.last().and_then(|t| t.feature.clone());
        self.hover
            .update(under_pointer, pointer.modifiers.alt, ctx.surface);
        self.events.emit(DrawEvent::Move { targets });
        InputResponse::PASS
    }

    fn on_pointer_up(&mut self, ctx: &mut DrawContext<'_>, pointer: &PointerInput) -> InputResponse {
        match self.gesture.release(pointer, &self.thresholds) {
            Some(GestureOutcome::Click) => {
                self.block_double_click(pointer.time_ms, ctx.surface);
                self.emit_click(ctx, pointer.position, pointer.modifiers);
            }
            Some(GestureOutcome::Drag) => {}
            None if self.gesture.is_pressed() => {
                // Release eines fremden Touch-Punkts
            }
            None => {
                // Release nach Shift-Klick: zweiter Punkt des Orthogonal-Segments
                if self.session.needs_segment() {
                    self.emit_click(ctx, pointer.position, pointer.modifiers);
                }
            }
        }
        InputResponse::PASS
    }

    fn on_key_down(&mut self, ctx: &mut DrawContext<'_>, key: &KeyInput) -> InputResponse {
        if key.modifiers.shift {
            self.set_orthogonal_indicator(true, ctx.surface);
        }

        let Some(action) = self.keymap.action_for(key.key) else {
            return InputResponse::PASS;
        };

        match action {
            DrawAction::Undo => self.session.undo_anchor(),
            DrawAction::Cancel | DrawAction::Finish => self.session.reset(),
        }
        self.events.emit(action.event());
        InputResponse::PREVENT_DEFAULT
    }

    fn on_key_up(&mut self, ctx: &mut DrawContext<'_>, key: &KeyInput) -> InputResponse {
        if !key.modifiers.shift {
            self.set_orthogonal_indicator(false, ctx.surface);
        }
        InputResponse::PASS
    }

    // ── Platzierung ─────────────────────────────────────────────

    /// Löst die Ziele an `pointer` auf und emittiert je Ziel ein Platzierungs-Event.
    ///
    /// Alle Ziele außer dem letzten sind Zwischenpunkte. Solange das
    /// Orthogonal-Segment offen ist, wird jede Platzierung als Anker gemerkt.
    fn emit_click(&mut self, ctx: &mut DrawContext<'_>, pointer: ScreenPoint, modifiers: Modifiers) {
        let targets = self.targets_at(ctx, pointer, modifiers);
        let count = targets.len();

        for (i, target) in targets.into_iter().enumerate() {
            let is_intermediate = i + 1 < count;
            let (event, loc) = match target.feature {
                Some(FeatureRef::Way(way)) => {
                    let nodes = ctx.features.child_nodes(&way);
                    match choose_edge(&nodes, target.point, ctx.projection) {
                        Some(choice) => (
                            DrawEvent::ClickWay {
                                loc: choice.loc,
                                edge: [nodes[choice.index - 1].id, nodes[choice.index].id],
                                is_intermediate,
                            },
                            choice.loc,
                        ),
                        None => {
                            log::warn!(
                                "Way {} hat keine Kante, platziere auf leerer Fläche",
                                way.id
                            );
                            (
                                DrawEvent::Click {
                                    loc: target.loc,
                                    is_intermediate,
                                },
                                target.loc,
                            )
                        }
                    }
                }
                Some(FeatureRef::Node(node)) => {
                    let loc = node.loc;
                    (
                        DrawEvent::ClickNode {
                            node,
                            is_intermediate,
                        },
                        loc,
                    )
                }
                None => (
                    DrawEvent::Click {
                        loc: target.loc,
                        is_intermediate,
                    },
                    target.loc,
                ),
            };

            self.events.emit(event);
            self.session.push_anchor(loc);
        }
    }

    // ── Host-Zustand ────────────────────────────────────────────

    fn block_double_click(&mut self, now_ms: u64, surface: &mut dyn HostSurface) {
        surface.set_double_click_enabled(false);
        let deadline = now_ms.saturating_add(self.options.double_click_block_ms);
        self.double_click_block_until = Some(deadline);
    }

    fn expire_double_click_block(&mut self, now_ms: u64, surface: &mut dyn HostSurface) {
        if let Some(deadline) = self.double_click_block_until {
            if now_ms >= deadline {
                self.double_click_block_until = None;
                surface.set_double_click_enabled(true);
                log::debug!("Native Doppelklicks wieder freigegeben");
            }
        }
    }

    fn set_orthogonal_indicator(&mut self, active: bool, surface: &mut dyn HostSurface) {
        if self.orthogonal_indicator != active {
            self.orthogonal_indicator = active;
            surface.set_orthogonal_indicator(active);
        }
    }
}

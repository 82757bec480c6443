//! Press/Release-Zyklus: unterscheidet Klicks von Drags anhand Distanz und Dauer.

use super::events::{PointerId, PointerInput};
use crate::core::{euclidean_distance, ScreenPoint};
use crate::shared::DrawOptions;

/// Ergebnis eines abgeschlossenen Press/Release-Zyklus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Kurzer, ruhiger Druck → Platzierung
    Click,
    /// Pointer wurde bewegt (z.B. Karte verschoben) → keine Platzierung
    Drag,
}

/// Zustand eines laufenden Drucks (nur zwischen Pointer-Down und Pointer-Up gültig).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickDisambiguation {
    pub start_time_ms: u64,
    pub start_pos: ScreenPoint,
    /// Touch-Identifier, falls der Druck per Touch begann
    pub touch_id: Option<u32>,
}

/// Schwellwerte der Klick-Erkennung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickThresholds {
    pub close_tolerance_px: f32,
    pub tolerance_px: f32,
    pub time_window_ms: u64,
}

impl ClickThresholds {
    /// Übernimmt die Schwellwerte aus den Optionen.
    pub fn from_options(options: &DrawOptions) -> Self {
        Self {
            close_tolerance_px: options.close_tolerance_px,
            tolerance_px: options.tolerance_px,
            time_window_ms: options.click_time_window_ms,
        }
    }

    /// Klick, wenn sehr nah, oder nah und schnell genug.
    pub fn classify(&self, distance: f32, elapsed_ms: u64) -> GestureOutcome {
        if distance < self.close_tolerance_px
            || (distance < self.tolerance_px && elapsed_ms < self.time_window_ms)
        {
            GestureOutcome::Click
        } else {
            GestureOutcome::Drag
        }
    }
}

impl Default for ClickThresholds {
    fn default() -> Self {
        Self::from_options(&DrawOptions::default())
    }
}

/// Zustandsautomat Idle → Pressed → (Click | Drag) → Idle.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    pressed: Option<ClickDisambiguation>,
}

impl GestureTracker {
    /// Neuer Tracker im Idle-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Läuft gerade ein Druck?
    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    /// Aktueller Druck-Zustand (für Diagnose/Tests).
    pub fn pressed(&self) -> Option<&ClickDisambiguation> {
        self.pressed.as_ref()
    }

    /// Pointer-Down: Idle → Pressed.
    pub fn press(&mut self, input: &PointerInput) {
        let touch_id = match input.pointer {
            PointerId::Touch(id) => Some(id),
            PointerId::Mouse => None,
        };
        self.pressed = Some(ClickDisambiguation {
            start_time_ms: input.time_ms,
            start_pos: input.position,
            touch_id,
        });
    }

    /// Pointer-Up: Pressed → Click/Drag → Idle.
    ///
    /// Gibt `None` zurück, wenn kein Druck läuft oder das Event von einem
    /// anderen Touch-Punkt stammt; der Druck bleibt dann bestehen.
    pub fn release(
        &mut self,
        input: &PointerInput,
        thresholds: &ClickThresholds,
    ) -> Option<GestureOutcome> {
        let pressed = self.pressed?;
        if let Some(id) = pressed.touch_id {
            if input.pointer != PointerId::Touch(id) {
                return None;
            }
        }
        self.pressed = None;

        let distance = euclidean_distance(pressed.start_pos, input.position);
        let elapsed = input.time_ms.saturating_sub(pressed.start_time_ms);
        let outcome = thresholds.classify(distance, elapsed);
        log::debug!(
            "Geste aufgelöst: {:?} (Distanz {:.1}px, {}ms)",
            outcome,
            distance,
            elapsed
        );
        Some(outcome)
    }

    /// Verwirft einen laufenden Druck (z.B. bei Deaktivierung).
    pub fn reset(&mut self) {
        self.pressed = None;
    }
}

//! Draw Replay.
//!
//! Spielt ein aufgezeichnetes Eingabe-Skript gegen eine Karte ab und gibt die
//! erzeugten Draw-Events als JSON-Zeilen auf stdout aus.
//!
//! Aufruf: `draw-replay <map.json> <script.json> [options.toml] [--hints <hints.toml>]`

use anyhow::Context;
use clap::Parser;
use glam::{DVec2, Vec2};
use map_draw_behavior::app::{DrawAction, SharedHintRegistry};
use map_draw_behavior::{
    DrawContext, DrawController, DrawEvent, DrawOptions, EditMode, HintRegistry, InputEvent,
    MapData, MercatorProjection, Modifiers, RecordingSurface,
};
use serde::Deserialize;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Draw Replay v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = ReplayArgs::parse();
    let options = match &args.options {
        Some(path) => DrawOptions::load_from_file(path),
        None => DrawOptions::load_from_file(&DrawOptions::config_path()),
    };

    let mut map = MapData::load_from_file(&args.map)?;
    map.set_hit_radius(options.hit_radius_px);
    let script = ReplayScript::load_from_file(&args.script)?;

    // Registry einmal beim Start laden, damit Hinweise nur einmal erscheinen
    let hints_path = args.hints.clone().unwrap_or_else(HintRegistry::config_path);
    let hints: SharedHintRegistry =
        Rc::new(RefCell::new(HintRegistry::load_from_file(&hints_path)?));

    let mut surface = RecordingSurface::new();
    let events = run_script(&map, &script, options, Rc::clone(&hints), &mut surface);

    hints.borrow().save_to_file(&hints_path)?;

    for event in &events {
        println!("{}", serde_json::to_string(event)?);
    }
    log::info!(
        "{} Eingaben abgespielt, {} Events erzeugt, {} Host-Aufrufe",
        script.events.len(),
        events.len(),
        surface.calls().len()
    );
    Ok(())
}

/// Kommandozeile: `draw-replay <map.json> <script.json> [options.toml] [--hints <hints.toml>]`
#[derive(Debug, Parser)]
#[command(name = "draw-replay", version)]
struct ReplayArgs {
    /// Kartendaten (JSON)
    map: PathBuf,
    /// Aufgezeichnete Eingaben (JSON)
    script: PathBuf,
    /// Optionen (TOML); ohne Angabe die Datei neben der Binary
    options: Option<PathBuf>,
    /// Hint-Registry (TOML); ohne Angabe die Datei neben der Binary
    #[arg(long)]
    hints: Option<PathBuf>,
}

/// Aufgezeichnete Eingaben samt Ansicht und Editor-Modus.
#[derive(Debug, Deserialize)]
struct ReplayScript {
    #[serde(default)]
    mode: EditMode,
    /// Hinweistext, der beim Aktivieren angezeigt wird
    #[serde(default)]
    tail: Option<String>,
    /// Kartenmitte als (lon, lat)
    center: DVec2,
    /// Pixel pro Radiant
    scale: f64,
    #[serde(default = "default_viewport")]
    viewport: Vec2,
    events: Vec<InputEvent>,
}

fn default_viewport() -> Vec2 {
    Vec2::new(800.0, 600.0)
}

impl ReplayScript {
    fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Skript nicht lesbar: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Skript fehlerhaft: {}", path.display()))
    }
}

fn run_script(
    map: &MapData,
    script: &ReplayScript,
    options: DrawOptions,
    hints: SharedHintRegistry,
    surface: &mut RecordingSurface,
) -> Vec<DrawEvent> {
    let projection =
        MercatorProjection::centered_on(script.center, script.scale, script.viewport / 2.0);
    let mut controller = DrawController::new(options, hints);
    if let Some(text) = &script.tail {
        controller.set_tail(text.clone());
    }
    log::info!(
        "Tasten: Undo [{}], Abbrechen [{}], Abschließen [{}]",
        controller.keymap().label_for(DrawAction::Undo),
        controller.keymap().label_for(DrawAction::Cancel),
        controller.keymap().label_for(DrawAction::Finish)
    );

    let mut ctx = DrawContext {
        features: map,
        projection: &projection,
        surface,
        mode: script.mode,
    };

    controller.activate(&mut ctx, Modifiers::NONE);
    for input in &script.events {
        let response = controller.handle_input(&mut ctx, *input);
        log::debug!("{:?} → {:?}", input, response);
    }
    controller.deactivate(&mut ctx);

    controller.drain_events()
}

//! Zentrale Konfiguration für das Zeichen-Verhalten.
//!
//! `DrawOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Klick-Erkennung ─────────────────────────────────────────────────

/// Unterhalb dieser Distanz (Pixel) ist ein Press/Release immer ein Klick.
pub const CLOSE_TOLERANCE_PX: f32 = 4.0;
/// Unterhalb dieser Distanz (Pixel) ist ein schneller Press/Release ein Klick.
pub const TOLERANCE_PX: f32 = 12.0;
/// Zeitfenster (ms) für schnelle Klicks innerhalb von `TOLERANCE_PX`.
pub const CLICK_TIME_WINDOW_MS: u64 = 500;
/// Dauer (ms), für die nach einem Klick native Doppelklicks blockiert werden.
pub const DOUBLE_CLICK_BLOCK_MS: u64 = 500;

// ── Hit-Test ────────────────────────────────────────────────────────

/// Hit-Radius für Nodes und Ways in Screen-Pixeln.
pub const HIT_RADIUS_PX: f32 = crate::core::DEFAULT_HIT_RADIUS_PX;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen des Zeichen-Verhaltens.
/// Wird als `map_draw_behavior.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    /// Distanz (px), unter der ein Press/Release unabhängig von der Dauer als Klick gilt
    #[serde(default = "default_close_tolerance_px")]
    pub close_tolerance_px: f32,
    /// Distanz (px), unter der ein schneller Press/Release als Klick gilt
    #[serde(default = "default_tolerance_px")]
    pub tolerance_px: f32,
    /// Zeitfenster (ms) für schnelle Klicks
    #[serde(default = "default_click_time_window_ms")]
    pub click_time_window_ms: u64,
    /// Sperrdauer (ms) für native Doppelklicks nach einem Klick
    #[serde(default = "default_double_click_block_ms")]
    pub double_click_block_ms: u64,
    /// Hit-Radius für Features in Screen-Pixeln
    #[serde(default = "default_hit_radius_px")]
    pub hit_radius_px: f32,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            close_tolerance_px: CLOSE_TOLERANCE_PX,
            tolerance_px: TOLERANCE_PX,
            click_time_window_ms: CLICK_TIME_WINDOW_MS,
            double_click_block_ms: DOUBLE_CLICK_BLOCK_MS,
            hit_radius_px: HIT_RADIUS_PX,
        }
    }
}

fn default_close_tolerance_px() -> f32 {
    CLOSE_TOLERANCE_PX
}

fn default_tolerance_px() -> f32 {
    TOLERANCE_PX
}

fn default_click_time_window_ms() -> u64 {
    CLICK_TIME_WINDOW_MS
}

fn default_double_click_block_ms() -> u64 {
    DOUBLE_CLICK_BLOCK_MS
}

fn default_hit_radius_px() -> f32 {
    HIT_RADIUS_PX
}

impl DrawOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_draw_behavior"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_draw_behavior.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts: DrawOptions =
            toml::from_str("tolerance_px = 20.0\n").expect("TOML sollte gültig sein");

        assert_eq!(opts.tolerance_px, 20.0);
        assert_eq!(opts.close_tolerance_px, CLOSE_TOLERANCE_PX);
        assert_eq!(opts.click_time_window_ms, CLICK_TIME_WINDOW_MS);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("draw_opts_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis erwartet");
        let path = dir.join("options.toml");

        let opts = DrawOptions {
            hit_radius_px: 5.0,
            ..DrawOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern sollte klappen");

        assert_eq!(DrawOptions::load_from_file(&path), opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let opts = DrawOptions::load_from_file(std::path::Path::new("/nonexistent/draw.toml"));
        assert_eq!(opts, DrawOptions::default());
    }
}

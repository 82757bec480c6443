//! Registry bereits gezeigter Hinweistexte ("nicht erneut anzeigen").
//!
//! Wird einmal beim Anwendungsstart erzeugt und als geteiltes Handle an
//! alle `DrawController` übergeben. Tests erzeugen eigene, isolierte Instanzen.

use anyhow::Context;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Geteiltes Handle auf eine Registry (single-threaded).
pub type SharedHintRegistry = Rc<RefCell<HintRegistry>>;

/// Menge der Hinweistexte, die bereits einmal vollständig angezeigt wurden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintRegistry {
    #[serde(default)]
    used: IndexSet<String>,
}

impl HintRegistry {
    /// Leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leere Registry als geteiltes Handle.
    pub fn shared() -> SharedHintRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Wurde der Text bereits angezeigt?
    pub fn is_used(&self, text: &str) -> bool {
        self.used.contains(text)
    }

    /// Markiert einen Text als angezeigt. Gibt `true` zurück, wenn er neu war.
    pub fn mark_used(&mut self, text: &str) -> bool {
        self.used.insert(text.to_owned())
    }

    /// Anzahl markierter Texte.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Gibt `true` zurück, wenn noch kein Text markiert ist.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Lädt die Registry aus einer TOML-Datei; fehlende Datei ergibt eine leere Registry.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::info!("Keine Hint-Registry gefunden, starte leer");
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Hint-Registry nicht lesbar: {}", path.display()))?;
        let registry: Self = toml::from_str(&content)
            .with_context(|| format!("Hint-Registry fehlerhaft: {}", path.display()))?;
        log::info!(
            "Hint-Registry geladen aus {} ({} Einträge)",
            path.display(),
            registry.len()
        );
        Ok(registry)
    }

    /// Pfad der Registry-Datei neben der Optionen-Datei.
    pub fn config_path() -> std::path::PathBuf {
        crate::shared::DrawOptions::config_path().with_file_name("map_draw_hints.toml")
    }

    /// Speichert die Registry als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Hint-Registry nicht schreibbar: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_used_is_idempotent() {
        let mut registry = HintRegistry::new();
        assert!(registry.mark_used("Klicke, um zu starten"));
        assert!(!registry.mark_used("Klicke, um zu starten"));
        assert!(registry.is_used("Klicke, um zu starten"));
        assert!(!registry.is_used("anderer Text"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn separate_registries_do_not_share_state() {
        let a = HintRegistry::shared();
        let b = HintRegistry::shared();
        a.borrow_mut().mark_used("Hinweis");

        assert!(a.borrow().is_used("Hinweis"));
        assert!(b.borrow().is_empty());
    }

    #[test]
    fn file_roundtrip_keeps_order() {
        let dir = std::env::temp_dir().join(format!("draw_hints_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis erwartet");
        let path = dir.join("hints.toml");

        let mut registry = HintRegistry::new();
        registry.mark_used("zweiter");
        registry.mark_used("erster");
        registry.save_to_file(&path).expect("Speichern sollte klappen");

        let loaded = HintRegistry::load_from_file(&path).expect("Laden sollte klappen");
        assert_eq!(loaded, registry);
        assert_eq!(loaded.used.first().map(String::as_str), Some("zweiter"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn config_path_sits_next_to_options() {
        let hints = HintRegistry::config_path();
        let options = crate::shared::DrawOptions::config_path();
        assert_eq!(hints.parent(), options.parent());
        assert_eq!(
            hints.file_name().and_then(|n| n.to_str()),
            Some("map_draw_hints.toml")
        );
    }

    #[test]
    fn missing_file_yields_empty_registry() {
        let registry =
            HintRegistry::load_from_file(std::path::Path::new("/nonexistent/hints.toml"))
                .expect("Fehlende Datei ist kein Fehler");
        assert!(registry.is_empty());
    }
}

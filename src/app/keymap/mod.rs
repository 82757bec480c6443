//! Tastenbelegung des Zeichen-Verhaltens.
//!
//! Bindet benannte Aktionen (Undo, Abbrechen, Abschließen) an Tasten und
//! übersetzt Tastendrücke in `DrawEvent`s.

use super::events::{DrawEvent, Key};
use indexmap::IndexMap;

/// Benannte Aktionen, die per Taste ausgelöst werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawAction {
    /// Letzten Punkt entfernen
    Undo,
    /// Zeichnen abbrechen
    Cancel,
    /// Zeichnen abschließen
    Finish,
}

impl DrawAction {
    /// Event, das die Aktion auslöst.
    pub fn event(self) -> DrawEvent {
        match self {
            DrawAction::Undo => DrawEvent::Undo,
            DrawAction::Cancel => DrawEvent::Cancel,
            DrawAction::Finish => DrawEvent::Finish,
        }
    }
}

/// Anzeigesymbol einer Taste (für Tooltips/Hilfe).
pub fn key_symbol(key: Key) -> &'static str {
    match key {
        Key::Backspace => "⌫",
        Key::Delete => "⌦",
        Key::Escape => "⎋",
        Key::Enter => "↩",
        Key::Shift => "⇧",
        Key::Alt => "⌥",
        Key::Other => "",
    }
}

/// Zuordnung Taste → Aktion in Registrierungsreihenfolge.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawKeymap {
    bindings: IndexMap<Key, DrawAction>,
}

impl Default for DrawKeymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(Key::Backspace, DrawAction::Undo);
        keymap.bind(Key::Delete, DrawAction::Cancel);
        keymap.bind(Key::Escape, DrawAction::Finish);
        keymap.bind(Key::Enter, DrawAction::Finish);
        keymap
    }
}

impl DrawKeymap {
    /// Keymap ohne Belegungen.
    pub fn empty() -> Self {
        Self {
            bindings: IndexMap::new(),
        }
    }

    /// Bindet eine Taste an eine Aktion (überschreibt bestehende Belegung).
    pub fn bind(&mut self, key: Key, action: DrawAction) {
        self.bindings.insert(key, action);
    }

    /// Entfernt die Belegung einer Taste.
    pub fn unbind(&mut self, key: Key) -> Option<DrawAction> {
        self.bindings.shift_remove(&key)
    }

    /// Aktion zu einer Taste.
    pub fn action_for(&self, key: Key) -> Option<DrawAction> {
        self.bindings.get(&key).copied()
    }

    /// Alle Tasten, die eine Aktion auslösen.
    pub fn keys_for(&self, action: DrawAction) -> Vec<Key> {
        self.bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect()
    }

    /// Lesbare Beschriftung, z.B. `"⎋ ↩"` für Finish.
    pub fn label_for(&self, action: DrawAction) -> String {
        self.keys_for(action)
            .into_iter()
            .map(key_symbol)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests;

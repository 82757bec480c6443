//! Rohe Eingaben des Hosts: Pointer, Tasten, Modifier und die Rückmeldung an den Host.

use crate::core::ScreenPoint;
use serde::{Deserialize, Serialize};

/// Gedrückte Modifier-Tasten zum Zeitpunkt eines Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    /// Ctrl bzw. Cmd (macOS)
    pub command: bool,
}

impl Modifiers {
    /// Keine Modifier gedrückt
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        command: false,
    };
    /// Nur Shift
    pub const SHIFT: Self = Self {
        shift: true,
        alt: false,
        command: false,
    };
    /// Nur Alt
    pub const ALT: Self = Self {
        shift: false,
        alt: true,
        command: false,
    };
}

/// Herkunft eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerId {
    #[default]
    Mouse,
    /// Touch-Punkt mit Identifier des Hosts
    Touch(u32),
}

/// Rohes Pointer-Event aus dem Host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Position relativ zur Kartenfläche
    pub position: ScreenPoint,
    /// Host-Zeitstempel in Millisekunden
    pub time_ms: u64,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub pointer: PointerId,
}

impl PointerInput {
    /// Maus-Event ohne Modifier.
    pub fn mouse(position: ScreenPoint, time_ms: u64) -> Self {
        Self {
            position,
            time_ms,
            modifiers: Modifiers::NONE,
            pointer: PointerId::Mouse,
        }
    }

    /// Touch-Event mit Identifier.
    pub fn touch(id: u32, position: ScreenPoint, time_ms: u64) -> Self {
        Self {
            position,
            time_ms,
            modifiers: Modifiers::NONE,
            pointer: PointerId::Touch(id),
        }
    }

    /// Ersetzt die Modifier.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Tasten, die das Zeichen-Verhalten unterscheidet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Backspace,
    Delete,
    Escape,
    Enter,
    Shift,
    Alt,
    /// Jede andere Taste
    Other,
}

/// Rohes Tastatur-Event aus dem Host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    pub key: Key,
    /// Modifier-Zustand *nach* dem Event (wie vom Host gemeldet)
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub time_ms: u64,
}

impl KeyInput {
    /// Taste ohne Modifier.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            time_ms: 0,
        }
    }
}

/// Alle Eingaben, die der `DrawController` verarbeitet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown(PointerInput),
    PointerMove(PointerInput),
    PointerUp(PointerInput),
    KeyDown(KeyInput),
    KeyUp(KeyInput),
    /// Nativer (Browser-)Klick, der ggf. unterdrückt werden muss
    NativeClick { time_ms: u64 },
    /// Zeitfortschritt ohne Eingabe (für verzögerte Reaktivierungen)
    Tick { time_ms: u64 },
}

impl InputEvent {
    /// Host-Zeitstempel des Events.
    pub fn time_ms(&self) -> u64 {
        match self {
            InputEvent::PointerDown(p) | InputEvent::PointerMove(p) | InputEvent::PointerUp(p) => {
                p.time_ms
            }
            InputEvent::KeyDown(k) | InputEvent::KeyUp(k) => k.time_ms,
            InputEvent::NativeClick { time_ms } | InputEvent::Tick { time_ms } => *time_ms,
        }
    }
}

/// Rückmeldung an den Host, wie mit dem nativen Event zu verfahren ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InputResponse {
    /// Standard-Aktion des Hosts unterdrücken
    pub prevent_default: bool,
    /// Weiterleitung an andere Listener stoppen
    pub stop_propagation: bool,
}

impl InputResponse {
    /// Event normal weiterreichen
    pub const PASS: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };
    /// Nur Standard-Aktion unterdrücken
    pub const PREVENT_DEFAULT: Self = Self {
        prevent_default: true,
        stop_propagation: false,
    };
    /// Event vollständig konsumieren
    pub const CONSUME: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };
    /// Nur Weiterleitung stoppen
    pub const STOP_PROPAGATION: Self = Self {
        prevent_default: false,
        stop_propagation: true,
    };
}

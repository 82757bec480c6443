//! Hover-Verfolgung: meldet Wechsel des Features unter dem Pointer an den Host.

use super::host::HostSurface;
use crate::core::FeatureRef;

/// Merkt sich das zuletzt gemeldete Hover-Feature.
///
/// Alt gedrückt → kein Hover, da Alt das Platzieren neuer Punkte erzwingt.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    hovered: Option<FeatureRef>,
}

impl HoverTracker {
    /// Neuer Tracker ohne Hover.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuell gemeldetes Feature.
    pub fn hovered(&self) -> Option<&FeatureRef> {
        self.hovered.as_ref()
    }

    /// Aktualisiert das Hover-Feature und meldet nur Änderungen.
    pub fn update(&mut self, feature: Option<FeatureRef>, alt: bool, surface: &mut dyn HostSurface) {
        let next = if alt { None } else { feature };

        let changed = match (&self.hovered, &next) {
            (Some(a), Some(b)) => !a.same_feature(b),
            (None, None) => false,
            _ => true,
        };
        if changed {
            surface.hover(next.as_ref());
            self.hovered = next;
        }
    }

    /// Setzt das Hover zurück (Deaktivierung).
    pub fn clear(&mut self, surface: &mut dyn HostSurface) {
        if self.hovered.take().is_some() {
            surface.hover(None);
        }
    }
}

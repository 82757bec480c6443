//! Schnittstellen zum Host: Overlays, Doppelklick-Steuerung, Hover-Anzeige.

use super::session::EditMode;
use crate::core::{FeatureRef, FeatureSource, Projection};

/// Vom Host verwaltete visuelle Hilfen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "overlay", content = "text", rename_all = "snake_case")]
pub enum Overlay {
    /// Hervorhebung des Features unter dem Pointer
    Hover,
    /// Edit-Modus-Darstellung der Kartenfläche
    Edit,
    /// Hinweistext, der dem Pointer folgt
    Tail(String),
}

/// Fähigkeiten der Kartenfläche, die das Zeichen-Verhalten nutzt.
///
/// Alle Aufrufe sind idempotent; der Host verwaltet den visuellen Zustand.
pub trait HostSurface {
    /// Overlay einblenden.
    fn install_overlay(&mut self, overlay: &Overlay);

    /// Overlay ausblenden.
    fn uninstall_overlay(&mut self, overlay: &Overlay);

    /// Visuellen Hinweis für Orthogonal-Zeichnen setzen/entfernen.
    fn set_orthogonal_indicator(&mut self, active: bool);

    /// Natives Doppelklick-Zoomen der Karte ein-/ausschalten.
    fn set_double_click_enabled(&mut self, enabled: bool);

    /// Feature unter dem Pointer melden (z.B. für die Sidebar).
    fn hover(&mut self, _feature: Option<&FeatureRef>) {}

    /// Läuft gerade die Einführungs-Tour? Dann keine Hinweistexte.
    fn in_intro(&self) -> bool {
        false
    }
}

/// Bündelt die Host-Fähigkeiten für einen Verarbeitungsschritt.
pub struct DrawContext<'a> {
    pub features: &'a dyn FeatureSource,
    pub projection: &'a dyn Projection,
    pub surface: &'a mut dyn HostSurface,
    pub mode: EditMode,
}

/// Protokollierter Aufruf an einer `RecordingSurface`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum SurfaceCall {
    Install { overlay: Overlay },
    Uninstall { overlay: Overlay },
    OrthogonalIndicator { active: bool },
    DoubleClickEnabled { enabled: bool },
    Hover { feature: Option<FeatureRef> },
}

/// Host-Implementierung ohne Darstellung: merkt sich Zustand und Aufrufe.
///
/// Wird von der Replay-Binary und in Tests verwendet.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Aktuell eingeblendete Overlays in Installationsreihenfolge
    pub overlays: Vec<Overlay>,
    pub orthogonal_indicator: bool,
    pub double_click_enabled: bool,
    pub intro: bool,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Neue Fläche mit aktivem Doppelklick.
    pub fn new() -> Self {
        Self {
            double_click_enabled: true,
            ..Self::default()
        }
    }

    /// Alle bisherigen Aufrufe.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Ist das Overlay gerade eingeblendet?
    pub fn has_overlay(&self, overlay: &Overlay) -> bool {
        self.overlays.contains(overlay)
    }
}

impl HostSurface for RecordingSurface {
    fn install_overlay(&mut self, overlay: &Overlay) {
        if !self.overlays.contains(overlay) {
            self.overlays.push(overlay.clone());
        }
        self.calls.push(SurfaceCall::Install {
            overlay: overlay.clone(),
        });
    }

    fn uninstall_overlay(&mut self, overlay: &Overlay) {
        self.overlays.retain(|o| o != overlay);
        self.calls.push(SurfaceCall::Uninstall {
            overlay: overlay.clone(),
        });
    }

    fn set_orthogonal_indicator(&mut self, active: bool) {
        self.orthogonal_indicator = active;
        self.calls.push(SurfaceCall::OrthogonalIndicator { active });
    }

    fn set_double_click_enabled(&mut self, enabled: bool) {
        self.double_click_enabled = enabled;
        self.calls.push(SurfaceCall::DoubleClickEnabled { enabled });
    }

    fn hover(&mut self, feature: Option<&FeatureRef>) {
        self.calls.push(SurfaceCall::Hover {
            feature: feature.cloned(),
        });
    }

    fn in_intro(&self) -> bool {
        self.intro
    }
}

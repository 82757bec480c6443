//! Zeichen-Sitzung: Editor-Modus und ausstehende Orthogonal-Anker.

use crate::core::GeoCoord;

/// Aktiver Editor-Modus des Hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Karte ansehen, nichts zeichnen
    #[default]
    Browse,
    /// Features selektieren
    Select,
    /// Einzelnen Punkt setzen
    AddPoint,
    /// Ersten Punkt einer Linie setzen
    AddLine,
    /// Ersten Punkt einer Fläche setzen
    AddArea,
    /// Linie wird gezeichnet
    DrawLine,
    /// Fläche wird gezeichnet
    DrawArea,
}

impl EditMode {
    /// Linien- und Flächenmodi unterstützen Orthogonal-Zeichnen (Shift + Klick).
    pub fn allows_orthogonal(self) -> bool {
        matches!(
            self,
            EditMode::AddLine | EditMode::AddArea | EditMode::DrawLine | EditMode::DrawArea
        )
    }
}

/// Zustand einer laufenden Zeichen-Geste.
///
/// Wird beim Abschließen, Abbrechen oder Undo bis zur Leere zurückgesetzt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawSession {
    anchors: Vec<GeoCoord>,
    orthogonal: bool,
}

impl DrawSession {
    /// Maximale Anzahl Anker eines Orthogonal-Segments.
    pub const MAX_ANCHORS: usize = 2;

    /// Leere Sitzung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Orthogonal-Modus aktiv?
    pub fn is_orthogonal(&self) -> bool {
        self.orthogonal
    }

    /// Aktiviert den Orthogonal-Modus.
    pub fn enter_orthogonal(&mut self) {
        self.orthogonal = true;
    }

    /// Ausstehende Segment-Anker (0..=2).
    pub fn anchors(&self) -> &[GeoCoord] {
        &self.anchors
    }

    /// Wird noch ein Anker für das Orthogonal-Segment benötigt?
    pub fn needs_segment(&self) -> bool {
        self.orthogonal && self.anchors.len() < Self::MAX_ANCHORS
    }

    /// Fügt einen Anker hinzu, solange das Segment offen ist.
    ///
    /// Gibt `false` zurück, wenn das Segment bereits fixiert oder der Modus inaktiv ist.
    pub fn push_anchor(&mut self, loc: GeoCoord) -> bool {
        if !self.needs_segment() {
            return false;
        }
        self.anchors.push(loc);
        true
    }

    /// Entfernt den letzten Anker; bei leerer Liste endet der Orthogonal-Modus.
    pub fn undo_anchor(&mut self) {
        self.anchors.pop();
        if self.anchors.is_empty() {
            self.orthogonal = false;
        }
    }

    /// Setzt die Sitzung vollständig zurück.
    pub fn reset(&mut self) {
        self.anchors.clear();
        self.orthogonal = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn anchors_never_exceed_two() {
        let mut session = DrawSession::new();
        session.enter_orthogonal();

        assert!(session.push_anchor(DVec2::new(1.0, 1.0)));
        assert!(session.push_anchor(DVec2::new(2.0, 2.0)));
        assert!(!session.push_anchor(DVec2::new(3.0, 3.0)));
        assert!(!session.push_anchor(DVec2::new(4.0, 4.0)));

        assert_eq!(session.anchors().len(), 2);
        assert!(!session.needs_segment());
    }

    #[test]
    fn push_without_orthogonal_is_noop() {
        let mut session = DrawSession::new();
        assert!(!session.push_anchor(DVec2::ZERO));
        assert!(session.anchors().is_empty());
    }

    #[test]
    fn undo_to_empty_leaves_orthogonal_mode() {
        let mut session = DrawSession::new();
        session.enter_orthogonal();
        session.push_anchor(DVec2::ZERO);
        session.push_anchor(DVec2::ONE);

        session.undo_anchor();
        assert!(session.is_orthogonal());
        assert!(session.needs_segment());

        session.undo_anchor();
        assert!(!session.is_orthogonal());
    }

    #[test]
    fn only_line_and_area_modes_allow_orthogonal() {
        assert!(EditMode::DrawLine.allows_orthogonal());
        assert!(EditMode::AddArea.allows_orthogonal());
        assert!(!EditMode::AddPoint.allows_orthogonal());
        assert!(!EditMode::Browse.allows_orthogonal());
    }
}

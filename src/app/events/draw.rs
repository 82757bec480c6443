//! Draw-Events, die das Verhalten an Abonnenten meldet, samt Platzierungszielen.

use crate::core::{FeatureRef, GeoCoord, MapNode, ScreenPoint};
use serde::Serialize;

/// Ziel einer Platzierung: Feature unter dem Pointer (falls vorhanden) und Geo-Position.
///
/// Wird bei jeder Pointer-Bewegung und jedem Klick neu berechnet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementTarget {
    /// Getroffenes Feature oder `None` für leere Fläche
    pub feature: Option<FeatureRef>,
    /// Geo-Position des Pointers bzw. des Hilfspunkts
    pub loc: GeoCoord,
    /// Bildschirmposition, an der aufgelöst wurde
    pub point: ScreenPoint,
}

impl PlacementTarget {
    /// Ziel auf leerer Fläche.
    pub fn empty(loc: GeoCoord, point: ScreenPoint) -> Self {
        Self {
            feature: None,
            loc,
            point,
        }
    }
}

/// Kanal-Namen des Event-Streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawEventKind {
    Move,
    Click,
    ClickWay,
    ClickNode,
    Undo,
    Cancel,
    Finish,
}

impl DrawEventKind {
    /// Alle Kanäle in fester Reihenfolge.
    pub const ALL: [DrawEventKind; 7] = [
        DrawEventKind::Move,
        DrawEventKind::Click,
        DrawEventKind::ClickWay,
        DrawEventKind::ClickNode,
        DrawEventKind::Undo,
        DrawEventKind::Cancel,
        DrawEventKind::Finish,
    ];

    /// Name des Kanals, wie ihn Abonnenten erwarten.
    pub fn name(self) -> &'static str {
        match self {
            DrawEventKind::Move => "move",
            DrawEventKind::Click => "click",
            DrawEventKind::ClickWay => "clickWay",
            DrawEventKind::ClickNode => "clickNode",
            DrawEventKind::Undo => "undo",
            DrawEventKind::Cancel => "cancel",
            DrawEventKind::Finish => "finish",
        }
    }

    /// Sucht den Kanal zu einem Namen.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Semantische Events des Zeichen-Verhaltens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum DrawEvent {
    /// Pointer bewegt; aufgelöste Ziele für Vorschau/Hover
    Move { targets: Vec<PlacementTarget> },
    /// Punkt auf leerer Fläche platziert
    #[serde(rename_all = "camelCase")]
    Click { loc: GeoCoord, is_intermediate: bool },
    /// Punkt auf existierendem Node platziert
    #[serde(rename_all = "camelCase")]
    ClickNode { node: MapNode, is_intermediate: bool },
    /// Punkt auf einer Kante eines Ways platziert (`edge` = Node-IDs vor/nach dem Punkt)
    #[serde(rename_all = "camelCase")]
    ClickWay {
        loc: GeoCoord,
        edge: [u64; 2],
        is_intermediate: bool,
    },
    /// Letzten Schritt rückgängig machen
    Undo,
    /// Zeichnen abbrechen
    Cancel,
    /// Zeichnen abschließen
    Finish,
}

impl DrawEvent {
    /// Kanal des Events.
    pub fn kind(&self) -> DrawEventKind {
        match self {
            DrawEvent::Move { .. } => DrawEventKind::Move,
            DrawEvent::Click { .. } => DrawEventKind::Click,
            DrawEvent::ClickNode { .. } => DrawEventKind::ClickNode,
            DrawEvent::ClickWay { .. } => DrawEventKind::ClickWay,
            DrawEvent::Undo => DrawEventKind::Undo,
            DrawEvent::Cancel => DrawEventKind::Cancel,
            DrawEvent::Finish => DrawEventKind::Finish,
        }
    }

    /// `true` für alle Platzierungs-Events (Click, ClickNode, ClickWay).
    pub fn is_placement(&self) -> bool {
        matches!(
            self,
            DrawEvent::Click { .. } | DrawEvent::ClickNode { .. } | DrawEvent::ClickWay { .. }
        )
    }

    /// Zwischenpunkt-Flag einer Platzierung (`None` für andere Events).
    pub fn is_intermediate(&self) -> Option<bool> {
        match self {
            DrawEvent::Click {
                is_intermediate, ..
            }
            | DrawEvent::ClickNode {
                is_intermediate, ..
            }
            | DrawEvent::ClickWay {
                is_intermediate, ..
            } => Some(*is_intermediate),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn kind_names_roundtrip() {
        for kind in DrawEventKind::ALL {
            assert_eq!(DrawEventKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(DrawEventKind::from_name("dblclick"), None);
    }

    #[test]
    fn placement_flags() {
        let click = DrawEvent::Click {
            loc: DVec2::ZERO,
            is_intermediate: true,
        };
        assert!(click.is_placement());
        assert_eq!(click.is_intermediate(), Some(true));
        assert_eq!(DrawEvent::Finish.is_intermediate(), None);
        assert_eq!(DrawEvent::Undo.kind().name(), "undo");
    }

    #[test]
    fn serializes_with_channel_tag() {
        let event = DrawEvent::ClickWay {
            loc: DVec2::new(1.0, 2.0),
            edge: [3, 4],
            is_intermediate: false,
        };
        let json = serde_json::to_value(&event).expect("Serialisierung erwartet");

        assert_eq!(json["event"], "clickWay");
        assert_eq!(json["edge"], serde_json::json!([3, 4]));
        assert_eq!(json["isIntermediate"], false);
    }
}

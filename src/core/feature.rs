//! Karten-Features: Nodes, Ways und typisierte Feature-Referenzen.

use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Geographische Koordinate: `x` = Längengrad, `y` = Breitengrad (Grad).
pub type GeoCoord = DVec2;

/// Bildschirmposition in Pixeln (y wächst nach unten).
pub type ScreenPoint = Vec2;

/// Einzelner Knoten der Karte
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    /// Eindeutige Node-ID
    pub id: u64,
    /// Geographische Position
    pub loc: GeoCoord,
}

impl MapNode {
    /// Erstellt einen neuen Node.
    pub fn new(id: u64, loc: GeoCoord) -> Self {
        Self { id, loc }
    }
}

/// Linienzug (Weg) als geordnete Folge von Node-IDs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapWay {
    /// Eindeutige Way-ID
    pub id: u64,
    /// Node-IDs in Zeichenreihenfolge
    pub node_ids: Vec<u64>,
}

impl MapWay {
    /// Erstellt einen neuen Way.
    pub fn new(id: u64, node_ids: Vec<u64>) -> Self {
        Self { id, node_ids }
    }

    /// Gibt `true` zurück, wenn erster und letzter Node identisch sind (Fläche).
    pub fn is_closed(&self) -> bool {
        self.node_ids.len() > 2 && self.node_ids.first() == self.node_ids.last()
    }
}

/// Ergebnis eines Hit-Tests: welches Feature liegt unter dem Pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureRef {
    /// Existierender Node
    Node(MapNode),
    /// Existierender Way
    Way(MapWay),
}

impl FeatureRef {
    /// Feature-ID unabhängig von der Art.
    pub fn id(&self) -> u64 {
        match self {
            FeatureRef::Node(node) => node.id,
            FeatureRef::Way(way) => way.id,
        }
    }

    /// Gibt `true` zurück, wenn beide Referenzen dasselbe Feature meinen.
    pub fn same_feature(&self, other: &FeatureRef) -> bool {
        matches!(
            (self, other),
            (FeatureRef::Node(a), FeatureRef::Node(b)) if a.id == b.id
        ) || matches!(
            (self, other),
            (FeatureRef::Way(a), FeatureRef::Way(b)) if a.id == b.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_way_needs_three_distinct_entries() {
        assert!(MapWay::new(1, vec![1, 2, 3, 1]).is_closed());
        assert!(!MapWay::new(2, vec![1, 2, 3]).is_closed());
        assert!(!MapWay::new(3, vec![1, 1]).is_closed());
    }

    #[test]
    fn same_feature_compares_kind_and_id() {
        let node = FeatureRef::Node(MapNode::new(7, GeoCoord::ZERO));
        let moved = FeatureRef::Node(MapNode::new(7, GeoCoord::new(1.0, 1.0)));
        let way = FeatureRef::Way(MapWay::new(7, vec![1, 2]));

        assert!(node.same_feature(&moved));
        assert!(!node.same_feature(&way));
        assert_eq!(way.id(), 7);
    }
}

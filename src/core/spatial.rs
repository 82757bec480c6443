//! Spatial-Index (KD-Tree) für schnelle Node-Abfragen in Geo-Koordinaten.

use std::collections::HashMap;

use kiddo::{KdTree, SquaredEuclidean};

use super::{GeoCoord, MapNode};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Nodes
    pub node_id: u64,
    /// Euklidische Distanz zum Suchpunkt (in Grad)
    pub distance: f64,
}

/// Read-only Spatial-Index über allen Nodes einer Karte.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    node_ids: Vec<u64>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            node_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Nodes.
    pub fn from_nodes(nodes: &HashMap<u64, MapNode>) -> Self {
        let mut node_ids: Vec<u64> = nodes.keys().copied().collect();
        node_ids.sort_unstable();

        let entries: Vec<[f64; 2]> = node_ids
            .iter()
            .filter_map(|id| nodes.get(id).map(|node| [node.loc.x, node.loc.y]))
            .collect();

        Self {
            tree: (&entries).into(),
            node_ids,
        }
    }

    /// Gibt die Anzahl indexierter Nodes zurück.
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Nodes im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Findet den nächsten Node zur gegebenen Geo-Position.
    pub fn nearest(&self, query: GeoCoord) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let node_id = *self.node_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            node_id,
            distance: result.distance.sqrt(),
        })
    }

    /// Findet alle Nodes innerhalb eines Radius (Grad), aufsteigend nach Distanz.
    pub fn within_radius(&self, query: GeoCoord, radius: f64) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|entry| {
                let node_id = *self.node_ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    node_id,
                    distance: entry.distance.sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn sample_nodes() -> HashMap<u64, MapNode> {
        let mut nodes = HashMap::new();
        nodes.insert(1, MapNode::new(1, DVec2::new(0.0, 0.0)));
        nodes.insert(2, MapNode::new(2, DVec2::new(0.010, 0.0)));
        nodes.insert(3, MapNode::new(3, DVec2::new(0.004, 0.003)));
        nodes
    }

    #[test]
    fn nearest_returns_expected_node() {
        let index = SpatialIndex::from_nodes(&sample_nodes());
        let nearest = index
            .nearest(DVec2::new(0.0039, 0.0029))
            .expect("Treffer erwartet");

        assert_eq!(nearest.node_id, 3);
        assert!(nearest.distance < 0.0002);
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let index = SpatialIndex::from_nodes(&sample_nodes());
        let matches = index.within_radius(DVec2::new(0.0, 0.0), 0.006);

        let ids: Vec<u64> = matches.into_iter().map(|m| m.node_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(DVec2::new(0.0, 0.0)).is_none());
        assert!(index.within_radius(DVec2::ZERO, 1.0).is_empty());
    }
}

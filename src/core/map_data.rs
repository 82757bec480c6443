//! Kartendaten (Nodes + Ways) mit Spatial-Index und Pixel-Hit-Test.

use super::geometry::{choose_edge, euclidean_distance};
use super::{FeatureRef, MapNode, MapWay, Projection, ScreenPoint, SpatialIndex};
use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Standard-Hit-Radius in Screen-Pixeln.
pub const DEFAULT_HIT_RADIUS_PX: f32 = 8.0;

/// Lesender Zugriff auf Karten-Features für das Zeichen-Verhalten.
pub trait FeatureSource {
    /// Liefert das Feature unter `point` (Screen-Koordinaten) oder `None` für leere Fläche.
    fn hit_test(&self, point: ScreenPoint, projection: &dyn Projection) -> Option<FeatureRef>;

    /// Vertex-Kette eines Ways in Zeichenreihenfolge.
    fn child_nodes(&self, way: &MapWay) -> Vec<MapNode>;
}

/// Serialisierbares Austauschformat für Kartendaten (JSON).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapDataFile {
    /// Alle Nodes
    #[serde(default)]
    pub nodes: Vec<MapNode>,
    /// Alle Ways
    #[serde(default)]
    pub ways: Vec<MapWay>,
}

/// In-Memory-Karte mit Nodes, Ways und KD-Tree über den Node-Positionen
#[derive(Debug, Clone)]
pub struct MapData {
    /// Alle Nodes, indexiert nach ihrer ID (nur über Methoden änderbar, damit der Index stimmt)
    nodes: HashMap<u64, MapNode>,
    /// Alle Ways, nach ID sortiert (deterministische Hit-Test-Reihenfolge)
    ways: BTreeMap<u64, MapWay>,
    /// Hit-Radius in Screen-Pixeln
    hit_radius_px: f32,
    spatial_index: SpatialIndex,
}

impl Default for MapData {
    fn default() -> Self {
        Self::new()
    }
}

impl MapData {
    /// Erstellt eine leere Karte.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            ways: BTreeMap::new(),
            hit_radius_px: DEFAULT_HIT_RADIUS_PX,
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Baut eine Karte aus dem Austauschformat.
    pub fn from_file_data(data: MapDataFile) -> Self {
        let mut map = Self::new();
        map.nodes = data.nodes.into_iter().map(|n| (n.id, n)).collect();
        map.ways = data.ways.into_iter().map(|w| (w.id, w)).collect();
        map.rebuild_spatial_index();
        map
    }

    /// Parst Kartendaten aus JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let data: MapDataFile =
            serde_json::from_str(json).context("Kartendaten-JSON ungültig")?;
        Ok(Self::from_file_data(data))
    }

    /// Lädt Kartendaten aus einer JSON-Datei.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Kartendatei nicht lesbar: {}", path.display()))?;
        let map = Self::from_json(&content)?;
        log::info!(
            "Karte geladen aus {}: {} Nodes, {} Ways",
            path.display(),
            map.node_count(),
            map.way_count()
        );
        Ok(map)
    }

    /// Fügt einen Node hinzu
    pub fn add_node(&mut self, node: MapNode) {
        self.nodes.insert(node.id, node);
        self.rebuild_spatial_index();
    }

    /// Fügt mehrere Nodes hinzu und baut den Spatial-Index nur einmal neu auf.
    pub fn extend_nodes(&mut self, nodes: impl IntoIterator<Item = MapNode>) {
        self.nodes
            .extend(nodes.into_iter().map(|node| (node.id, node)));
        self.rebuild_spatial_index();
    }

    /// Gibt einen Node per ID zurück.
    pub fn node(&self, id: u64) -> Option<&MapNode> {
        self.nodes.get(&id)
    }

    /// Fügt einen Way hinzu
    pub fn add_way(&mut self, way: MapWay) {
        self.ways.insert(way.id, way);
    }

    /// Gibt einen Way per ID zurück.
    pub fn way(&self, id: u64) -> Option<&MapWay> {
        self.ways.get(&id)
    }

    /// Anzahl der Nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der Ways
    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    /// Setzt den Hit-Radius (Screen-Pixel).
    pub fn set_hit_radius(&mut self, radius_px: f32) {
        self.hit_radius_px = radius_px.max(0.0);
    }

    /// Aktueller Hit-Radius in Screen-Pixeln.
    pub fn hit_radius(&self) -> f32 {
        self.hit_radius_px
    }

    /// Baut den Spatial-Index komplett neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_nodes(&self.nodes);
    }

    /// Nächster Node innerhalb des Hit-Radius (Screen-Distanz).
    fn hit_node(&self, point: ScreenPoint, projection: &dyn Projection) -> Option<&MapNode> {
        let center = projection.invert(point);
        let r = self.hit_radius_px;
        // Konservativer Grad-Radius: Mercator verzerrt x und y unterschiedlich
        let radius_deg = [
            Vec2::new(r, 0.0),
            Vec2::new(-r, 0.0),
            Vec2::new(0.0, r),
            Vec2::new(0.0, -r),
        ]
        .iter()
        .map(|offset| projection.invert(point + *offset).distance(center))
        .fold(0.0_f64, f64::max);

        self.spatial_index
            .within_radius(center, radius_deg)
            .into_iter()
            .filter_map(|m| self.nodes.get(&m.node_id))
            .map(|node| (node, euclidean_distance(projection.project(node.loc), point)))
            .filter(|(_, d)| *d <= r)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(node, _)| node)
    }

    /// Nächster Way innerhalb des Hit-Radius.
    fn hit_way(&self, point: ScreenPoint, projection: &dyn Projection) -> Option<&MapWay> {
        self.ways
            .values()
            .filter_map(|way| {
                let choice = choose_edge(&self.child_nodes(way), point, projection)?;
                (choice.distance <= self.hit_radius_px).then_some((way, choice.distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(way, _)| way)
    }
}

impl FeatureSource for MapData {
    fn hit_test(&self, point: ScreenPoint, projection: &dyn Projection) -> Option<FeatureRef> {
        // Vertices liegen über den Linien und haben Vorrang
        if let Some(node) = self.hit_node(point, projection) {
            return Some(FeatureRef::Node(node.clone()));
        }
        self.hit_way(point, projection)
            .map(|way| FeatureRef::Way(way.clone()))
    }

    fn child_nodes(&self, way: &MapWay) -> Vec<MapNode> {
        way.node_ids
            .iter()
            .filter_map(|id| self.nodes.get(id).cloned())
            .collect()
    }
}

//! Core-Domänentypen: Features, Projektion, Geometrie, Spatial-Index, Kartendaten.

pub mod feature;
pub mod geometry;
pub mod map_data;
pub mod projection;
pub mod spatial;

pub use feature::{FeatureRef, GeoCoord, MapNode, MapWay, ScreenPoint};
pub use geometry::{choose_edge, closest_point_on_segment, euclidean_distance, EdgeChoice};
pub use map_data::{FeatureSource, MapData, MapDataFile, DEFAULT_HIT_RADIUS_PX};
pub use projection::{MercatorProjection, Projection};
pub use spatial::{SpatialIndex, SpatialMatch};

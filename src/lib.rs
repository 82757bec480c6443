//! Map Draw Behavior Library.
//! Übersetzt Pointer- und Tastatur-Eingaben einer Kartenfläche in Platzierungs-Events.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    DrawContext, DrawController, DrawEvent, DrawEventKind, DrawSession, EditMode, HintRegistry,
    HostSurface, InputEvent, InputResponse, Modifiers, PlacementTarget, PointerInput,
    RecordingSurface,
};
pub use core::{
    FeatureRef, FeatureSource, GeoCoord, MapData, MapNode, MapWay, MercatorProjection, Projection,
    ScreenPoint, SpatialIndex, SpatialMatch,
};
pub use shared::DrawOptions;

//! Application-Layer: Draw-Controller, Eingabe-Events, Sitzung und Host-Schnittstellen.

pub mod controller;
pub mod event_bus;
pub mod events;
pub mod gesture;
pub mod hints;
pub mod host;
pub mod hover;
pub mod keymap;
pub mod session;
pub mod targets;

pub use controller::DrawController;
pub use event_bus::{DrawEventBus, SubscriptionId};
pub use events::{
    DrawEvent, DrawEventKind, InputEvent, InputResponse, Key, KeyInput, Modifiers, PlacementTarget,
    PointerId, PointerInput,
};
pub use gesture::{ClickDisambiguation, ClickThresholds, GestureOutcome, GestureTracker};
pub use hints::{HintRegistry, SharedHintRegistry};
pub use host::{DrawContext, HostSurface, Overlay, RecordingSurface, SurfaceCall};
pub use hover::HoverTracker;
pub use keymap::{key_symbol, DrawAction, DrawKeymap};
pub use session::{DrawSession, EditMode};
pub use targets::{orthogonal_aid_points, resolve_targets};

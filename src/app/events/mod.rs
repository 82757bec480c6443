//! Eingabe-Events (Host → Verhalten) und Draw-Events (Verhalten → Abonnenten).

mod draw;
mod input;

pub use draw::{DrawEvent, DrawEventKind, PlacementTarget};
pub use input::{InputEvent, InputResponse, Key, KeyInput, Modifiers, PointerId, PointerInput};

//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die sowohl vom `app`-Layer
//! als auch von der Replay-Binary gelesen wird.

pub mod options;

pub use options::DrawOptions;
pub use options::{CLICK_TIME_WINDOW_MS, CLOSE_TOLERANCE_PX, DOUBLE_CLICK_BLOCK_MS, TOLERANCE_PX};

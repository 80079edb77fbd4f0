//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `core` (Framing) und `app` (Tools)
//! gemeinsam lesen.

pub mod options;

pub use options::EditorOptions;
pub use options::{DEFAULT_CIRCLE_RADIUS_M, DOUBLE_CLICK_WINDOW_MS, MAX_VERTICES};

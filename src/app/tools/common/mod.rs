//! Gemeinsame Hilfsfunktionen für die Eingabe-Werkzeuge.
//!
//! - `click_debounce`: Einfach-/Doppelklick-Unterscheidung per Zeitfenster

mod click_debounce;

pub use click_debounce::{ClickDebounce, PendingClick};

//! Feature-Handler für FenceCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod coordinates;
pub mod drawing;
pub mod session;
pub mod view;

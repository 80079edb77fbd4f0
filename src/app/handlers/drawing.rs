//! Handler für Karten-Zeichnen.

use std::time::Instant;

use crate::app::use_cases;
use crate::app::FenceEditState;
use crate::core::{FenceKind, GeoPoint};

pub fn start(state: &mut FenceEditState, kind: FenceKind) {
    use_cases::drawing::start(state, kind);
}

pub fn click(state: &mut FenceEditState, position: GeoPoint, at: Instant) {
    use_cases::drawing::click(state, position, at);
}

pub fn pointer_move(state: &mut FenceEditState, position: GeoPoint, at: Instant) {
    use_cases::drawing::pointer_move(state, position, at);
}

pub fn double_click(state: &mut FenceEditState, position: GeoPoint, at: Instant) {
    use_cases::drawing::double_click(state, position, at);
}

/// Übernimmt einen abgelaufenen Einfach-Klick.
pub fn tick(state: &mut FenceEditState, now: Instant) {
    use_cases::drawing::tick(state, now);
}

pub fn finish(state: &mut FenceEditState, at: Instant) {
    use_cases::drawing::finish(state, at);
}

pub fn undo_vertex(state: &mut FenceEditState, at: Instant) {
    use_cases::drawing::undo_vertex(state, at);
}

pub fn clear(state: &mut FenceEditState) {
    use_cases::drawing::clear(state);
}

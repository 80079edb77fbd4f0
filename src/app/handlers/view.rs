//! Handler für Viewport und Karten-Ausschnitt.

use crate::app::use_cases;
use crate::app::FenceEditState;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut FenceEditState, size: [f64; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Zentriert die Karte auf die aktuelle Form.
pub fn center_on_shape(state: &mut FenceEditState) {
    use_cases::viewport::center_on_shape(state);
}

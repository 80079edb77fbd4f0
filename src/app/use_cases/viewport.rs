//! Use-Case-Funktionen für Viewport und Karten-Ausschnitt.

use crate::app::FenceEditState;
use crate::core::frame_shape;

/// Aktualisiert die Viewport-Größe im State.
pub fn resize(state: &mut FenceEditState, size: [f64; 2]) {
    state.view.viewport_size = size;
}

/// Berechnet den Ausschnitt "Auf Zaun zentrieren".
///
/// Ohne positionierte Form bleibt der bisherige Ausschnitt unverändert.
pub fn center_on_shape(state: &mut FenceEditState) {
    let Some(shape) = state.shape.as_ref() else {
        return;
    };
    match frame_shape(shape, state.view.viewport_size, &state.options) {
        Some(framing) => {
            log::debug!(
                "Karte zentriert auf ({:.5}, {:.5}), Zoom {}",
                framing.center.latitude,
                framing.center.longitude,
                framing.zoom
            );
            state.view.framing = Some(framing);
        }
        None => log::debug!("Form ohne Position, kein Ausschnitt"),
    }
}

//! Übernahme von Form-Änderungen und Abgleich der beiden Modalitäten.

use crate::app::tools::{InputSource, ShapeUpdate};
use crate::app::FenceEditState;

/// Übernimmt eine Änderung aus `source` als maßgebliche Form.
///
/// Die andere Modalität wird unter einer neuen Sync-Generation abgeglichen.
/// Was sie dabei selbst ableitet, läuft erneut hier durch und wird vom Guard
/// als Echo verworfen. Der Host erhält genau eine Meldung, sofern sich die
/// Form tatsächlich geändert hat.
pub fn apply_shape_update(state: &mut FenceEditState, source: InputSource, update: ShapeUpdate) {
    let Some(generation) = state.sync.begin() else {
        log::trace!("Änderung aus {:?} während Abgleich ignoriert", source);
        return;
    };

    let payload = update.payload();
    let shape = update.into_shape();
    let changed = state.shape != shape;
    if let Some(shape) = &shape {
        state.kind = shape.kind();
    }
    state.shape = shape;

    let target = source.other();
    let current = state.shape.clone();
    if let Some(echo) = state
        .tool_mut(target)
        .sync_from_shape(current.as_ref(), generation)
    {
        apply_shape_update(state, target, echo);
    }
    state.sync.finish(generation);

    if changed {
        log::debug!(
            "Form aus {:?} übernommen (Generation {})",
            source,
            generation
        );
        state.outbox.push(payload);
    }
}

/// Gleicht beide Modalitäten mit der aktuellen Form ab (Laden, Zurücksetzen).
///
/// Es wird nichts an den Host gemeldet.
pub fn sync_all(state: &mut FenceEditState) {
    let Some(generation) = state.sync.begin() else {
        log::warn!("Abgleich aller Modalitäten während laufendem Abgleich");
        return;
    };
    let current = state.shape.clone();
    for source in [InputSource::MapDrawing, InputSource::CoordinateEntry] {
        if let Some(echo) = state
            .tool_mut(source)
            .sync_from_shape(current.as_ref(), generation)
        {
            apply_shape_update(state, source, echo);
        }
    }
    state.sync.finish(generation);
}

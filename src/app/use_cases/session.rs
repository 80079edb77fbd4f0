//! Use-Cases für den Sitzungs-Lebenszyklus: Öffnen, Laden, Speichern, Schließen.

use crate::app::collaborators::FenceRepository;
use crate::app::state::{EditMode, SaveOutcome};
use crate::app::tools::{FenceInputTool, InputSource};
use crate::app::FenceEditState;
use crate::core::{validate_shape, FenceKind, FenceShape, PersistedFence};
use crate::shared::EditorOptions;

use super::shape_sync;

/// Verwirft Form und Werkzeug-Zustände (Optionen und Modalität bleiben).
pub fn reset(state: &mut FenceEditState) {
    state.drawing.reset();
    state.coordinate_input.reset();
    state.shape = None;
    state.kind = FenceKind::default();
    state.edit_mode = EditMode::Create;
    state.last_save = None;
    state.notice = None;
    state.view.framing = None;
    log::debug!("Editor-Sitzung zurückgesetzt");
}

/// Setzt Anlege- oder Bearbeiten-Modus.
pub fn set_edit_mode(state: &mut FenceEditState, mode: EditMode) {
    state.edit_mode = mode;
}

/// Übernimmt einen gespeicherten Zaun als vollständige Form.
pub fn load_fence(state: &mut FenceEditState, record: &PersistedFence) {
    let shape = FenceShape::from_persisted(record);
    state.kind = shape.kind();
    state.shape = Some(shape);
    state.edit_mode = EditMode::Edit;
    shape_sync::sync_all(state);
    state.drawing.mark_complete();
    log::info!(
        "Zaun geladen: {:?} mit {} Eckpunkten",
        record.kind,
        state.shape.as_ref().map_or(0, FenceShape::vertex_count)
    );
}

/// Validiert die Form und übergibt sie bei Erfolg an das Repository.
///
/// Eine abgelehnte Form ist kein Fehler: der Grund landet in `last_save`.
pub fn save(
    state: &mut FenceEditState,
    repository: &mut dyn FenceRepository,
) -> anyhow::Result<()> {
    if let Err(failure) = validate_shape(state.shape.as_ref()) {
        log::warn!("Speichern abgelehnt: {}", failure);
        state.notice = Some(failure.to_string());
        state.last_save = Some(SaveOutcome::Rejected(failure));
        return Ok(());
    }

    let Some(record) = state.payload() else {
        return Ok(());
    };
    repository.save_fence(&record)?;
    log::info!("Zaun gespeichert ({:?}, {:?})", record.kind, state.edit_mode);
    state.notice = None;
    state.last_save = Some(SaveOutcome::Saved(record));
    Ok(())
}

/// Verwirft flüchtige Eingaben beider Modalitäten.
pub fn cancel_pending_input(state: &mut FenceEditState) {
    for source in [InputSource::MapDrawing, InputSource::CoordinateEntry] {
        let tool = state.tool_mut(source);
        if tool.has_pending_input() {
            log::debug!("Flüchtige Eingabe in {:?} verworfen", tool.source());
            tool.cancel_pending();
        }
    }
}

/// Setzt die aktive Modalität. Daten bleiben erhalten.
pub fn set_input_mode(state: &mut FenceEditState, mode: InputSource) {
    if state.input_mode != mode {
        log::debug!("Eingabe-Modalität: {:?}", mode);
        state.input_mode = mode;
    }
}

/// Wechselt den Zaun-Typ und verwirft die Daten des bisherigen Typs.
pub fn set_fence_kind(state: &mut FenceEditState, kind: FenceKind) {
    if state.kind == kind {
        return;
    }
    state.kind = kind;
    state.drawing.clear();
    state.coordinate_input.set_kind(kind);
    if state.shape.take().is_some() {
        state.outbox.push(None);
    }
    log::debug!("Zaun-Typ gewechselt: {:?}", kind);
}

/// Übernimmt neue Laufzeit-Optionen in State und Werkzeuge.
pub fn apply_options(state: &mut FenceEditState, options: EditorOptions) {
    state.drawing.apply_options(&options);
    state.coordinate_input.apply_options(&options);
    state.options = options;
}

//! Handler für Sitzungs-Lebenszyklus, Modalität und Optionen.

use crate::app::collaborators::FenceRepository;
use crate::app::state::EditMode;
use crate::app::tools::InputSource;
use crate::app::use_cases;
use crate::app::FenceEditState;
use crate::core::{FenceKind, PersistedFence};
use crate::shared::EditorOptions;

/// Setzt Form und Werkzeuge zurück.
pub fn reset(state: &mut FenceEditState) {
    use_cases::session::reset(state);
}

pub fn set_edit_mode(state: &mut FenceEditState, mode: EditMode) {
    use_cases::session::set_edit_mode(state, mode);
}

/// Lädt einen gespeicherten Zaun zum Bearbeiten.
pub fn load(state: &mut FenceEditState, record: &PersistedFence) {
    use_cases::session::load_fence(state, record);
}

/// Speichert die Form und propagiert Repository-Fehler an den Aufrufer.
pub fn save(
    state: &mut FenceEditState,
    repository: &mut dyn FenceRepository,
) -> anyhow::Result<()> {
    use_cases::session::save(state, repository)
}

pub fn cancel_pending_input(state: &mut FenceEditState) {
    use_cases::session::cancel_pending_input(state);
}

pub fn set_input_mode(state: &mut FenceEditState, mode: InputSource) {
    use_cases::session::set_input_mode(state, mode);
}

pub fn set_fence_kind(state: &mut FenceEditState, kind: FenceKind) {
    use_cases::session::set_fence_kind(state, kind);
}

/// Übernimmt neue Optionen.
pub fn apply_options(state: &mut FenceEditState, options: EditorOptions) {
    use_cases::session::apply_options(state, options);
}

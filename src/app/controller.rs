//! Controller für die zentrale Event-Verarbeitung einer Zaun-Bearbeitung.

use super::collaborators::{FenceRepository, ShapeChangedSink};
use super::state::SaveOutcome;
use super::{FenceCommand, FenceEditState, FenceIntent};

/// Orchestriert UI-Events und Use-Cases auf den FenceEditState.
///
/// Hält die externen Mitspieler: den Empfänger der Shape-Changed-Meldungen
/// und das Repository für gespeicherte Zäune.
pub struct FenceEditController {
    sink: Box<dyn ShapeChangedSink>,
    repository: Box<dyn FenceRepository>,
}

impl FenceEditController {
    /// Erstellt einen neuen Controller.
    pub fn new(
        sink: impl ShapeChangedSink + 'static,
        repository: impl FenceRepository + 'static,
    ) -> Self {
        Self {
            sink: Box::new(sink),
            repository: Box::new(repository),
        }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut FenceEditState,
        intent: FenceIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(
        &self,
        state: &FenceEditState,
        intent: FenceIntent,
    ) -> Vec<FenceCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem FenceEditState aus.
    /// Dispatcht an Feature-Handler in `handlers/` und stellt danach
    /// angefallene Shape-Changed-Meldungen zu.
    pub fn handle_command(
        &mut self,
        state: &mut FenceEditState,
        command: FenceCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Sitzung ===
            FenceCommand::ResetSession => handlers::session::reset(state),
            FenceCommand::SetEditMode { mode } => handlers::session::set_edit_mode(state, mode),
            FenceCommand::LoadFence { record } => handlers::session::load(state, &record),
            FenceCommand::SaveFence => handlers::session::save(state, self.repository.as_mut())?,
            FenceCommand::CancelPendingInput => handlers::session::cancel_pending_input(state),
            FenceCommand::SetInputMode { mode } => handlers::session::set_input_mode(state, mode),
            FenceCommand::SetFenceKind { kind } => handlers::session::set_fence_kind(state, kind),
            FenceCommand::ApplyOptions { options } => {
                handlers::session::apply_options(state, options)
            }

            // === Karte ===
            FenceCommand::StartDrawing { kind } => handlers::drawing::start(state, kind),
            FenceCommand::DrawingClick { position, at } => {
                handlers::drawing::click(state, position, at)
            }
            FenceCommand::DrawingMove { position, at } => {
                handlers::drawing::pointer_move(state, position, at)
            }
            FenceCommand::DrawingDoubleClick { position, at } => {
                handlers::drawing::double_click(state, position, at)
            }
            FenceCommand::DrawingTick { now } => handlers::drawing::tick(state, now),
            FenceCommand::FinishDrawing { at } => handlers::drawing::finish(state, at),
            FenceCommand::UndoVertex { at } => handlers::drawing::undo_vertex(state, at),
            FenceCommand::ClearDrawing => handlers::drawing::clear(state),

            // === Koordinaten-Eingabe ===
            FenceCommand::SetVertexField { index, field, raw } => {
                handlers::coordinates::set_vertex_field(state, index, field, &raw)
            }
            FenceCommand::SetCircleField { field, raw } => {
                handlers::coordinates::set_circle_field(state, field, &raw)
            }
            FenceCommand::AddVertexRow => handlers::coordinates::add_vertex(state),
            FenceCommand::RemoveVertexRow { index } => {
                handlers::coordinates::remove_vertex(state, index)
            }

            // === Ansicht ===
            FenceCommand::SetViewportSize { size } => {
                handlers::view::set_viewport_size(state, size)
            }
            FenceCommand::CenterOnShape => handlers::view::center_on_shape(state),
        }

        self.flush_notifications(state);
        Ok(())
    }

    /// Speichert die aktuelle Form und liefert das Ergebnis.
    ///
    /// `Err` nur bei Repository-Fehlern; eine ungültige Form ergibt
    /// `SaveOutcome::Rejected`.
    pub fn save(&mut self, state: &mut FenceEditState) -> anyhow::Result<SaveOutcome> {
        state.last_save = None;
        self.handle_intent(state, FenceIntent::SaveRequested)?;
        state
            .last_save
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Speichern ohne Ergebnis"))
    }

    fn flush_notifications(&mut self, state: &mut FenceEditState) {
        for payload in state.outbox.drain(..) {
            self.sink.shape_changed(payload.as_ref());
        }
    }
}

//! Mapping von UI-Intents auf mutierende Fence-Commands.

use super::state::EditMode;
use super::tools::InputSource;
use super::{FenceCommand, FenceEditState, FenceIntent};

/// Übersetzt einen `FenceIntent` in eine Sequenz ausführbarer `FenceCommand`s.
///
/// Karten-Events wirken nur im Zeichen-Modus, Feld-Eingaben nur in der
/// Koordinaten-Eingabe.
pub fn map_intent_to_commands(state: &FenceEditState, intent: FenceIntent) -> Vec<FenceCommand> {
    let drawing_active = state.input_mode == InputSource::MapDrawing;
    let entry_active = state.input_mode == InputSource::CoordinateEntry;

    match intent {
        // ── Sitzung ─────────────────────────────────────────────
        FenceIntent::CreateRequested { kind } => vec![
            FenceCommand::CancelPendingInput,
            FenceCommand::ResetSession,
            FenceCommand::SetEditMode {
                mode: EditMode::Create,
            },
            FenceCommand::SetFenceKind { kind },
        ],
        FenceIntent::LoadFenceRequested { record } => vec![
            FenceCommand::CancelPendingInput,
            FenceCommand::ResetSession,
            FenceCommand::LoadFence { record },
        ],
        FenceIntent::SaveRequested => vec![FenceCommand::SaveFence],
        FenceIntent::CloseRequested => {
            vec![FenceCommand::CancelPendingInput, FenceCommand::ResetSession]
        }
        FenceIntent::InputModeChanged { mode } => {
            if mode == state.input_mode {
                Vec::new()
            } else {
                vec![
                    FenceCommand::CancelPendingInput,
                    FenceCommand::SetInputMode { mode },
                ]
            }
        }
        FenceIntent::FenceKindChanged { kind } => {
            if kind == state.kind {
                Vec::new()
            } else {
                vec![
                    FenceCommand::CancelPendingInput,
                    FenceCommand::SetFenceKind { kind },
                ]
            }
        }
        FenceIntent::OptionsChanged { options } => vec![FenceCommand::ApplyOptions { options }],

        // ── Karte ───────────────────────────────────────────────
        FenceIntent::StartDrawingRequested { kind } if drawing_active => {
            if kind == state.kind {
                vec![FenceCommand::StartDrawing { kind }]
            } else {
                vec![
                    FenceCommand::SetFenceKind { kind },
                    FenceCommand::StartDrawing { kind },
                ]
            }
        }
        FenceIntent::MapClicked { position, at } if drawing_active => {
            vec![FenceCommand::DrawingClick { position, at }]
        }
        FenceIntent::MapPointerMoved { position, at } if drawing_active => {
            vec![FenceCommand::DrawingMove { position, at }]
        }
        FenceIntent::MapDoubleClicked { position, at } if drawing_active => {
            vec![FenceCommand::DrawingDoubleClick { position, at }]
        }
        FenceIntent::TimerTick { now } => vec![FenceCommand::DrawingTick { now }],
        FenceIntent::FinishDrawingRequested { at } if drawing_active => {
            vec![FenceCommand::FinishDrawing { at }]
        }
        FenceIntent::UndoVertexRequested { at } if drawing_active => {
            vec![FenceCommand::UndoVertex { at }]
        }
        FenceIntent::ClearDrawingRequested if drawing_active => vec![FenceCommand::ClearDrawing],
        FenceIntent::StartDrawingRequested { .. }
        | FenceIntent::MapClicked { .. }
        | FenceIntent::MapPointerMoved { .. }
        | FenceIntent::MapDoubleClicked { .. }
        | FenceIntent::FinishDrawingRequested { .. }
        | FenceIntent::UndoVertexRequested { .. }
        | FenceIntent::ClearDrawingRequested => Vec::new(),

        // ── Koordinaten-Eingabe ─────────────────────────────────
        FenceIntent::VertexFieldEdited { index, field, raw } if entry_active => {
            vec![FenceCommand::SetVertexField { index, field, raw }]
        }
        FenceIntent::CircleFieldEdited { field, raw } if entry_active => {
            vec![FenceCommand::SetCircleField { field, raw }]
        }
        FenceIntent::AddVertexRequested if entry_active => vec![FenceCommand::AddVertexRow],
        FenceIntent::RemoveVertexRequested { index } if entry_active => {
            vec![FenceCommand::RemoveVertexRow { index }]
        }
        FenceIntent::VertexFieldEdited { .. }
        | FenceIntent::CircleFieldEdited { .. }
        | FenceIntent::AddVertexRequested
        | FenceIntent::RemoveVertexRequested { .. } => Vec::new(),

        // ── Ansicht ─────────────────────────────────────────────
        FenceIntent::ViewportResized { size } => vec![FenceCommand::SetViewportSize { size }],
        FenceIntent::CenterOnShapeRequested => vec![FenceCommand::CenterOnShape],
    }
}

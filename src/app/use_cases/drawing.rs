//! Use-Cases für das Zeichnen auf der Karte.

use std::time::Instant;

use crate::app::tools::{DrawingAction, InputSource, ShapeUpdate};
use crate::app::FenceEditState;
use crate::core::{FenceKind, GeoPoint};

use super::shape_sync::apply_shape_update;

/// Startet eine neue Zeichnung des gegebenen Typs.
pub fn start(state: &mut FenceEditState, kind: FenceKind) {
    state.notice = None;
    let action = match kind {
        FenceKind::Polygon => state.drawing.start_polygon(),
        FenceKind::Circle => state.drawing.start_circle(),
    };
    apply_action(state, action);
}

pub fn click(state: &mut FenceEditState, position: GeoPoint, at: Instant) {
    let action = state.drawing.on_click(position, at);
    apply_action(state, action);
}

pub fn pointer_move(state: &mut FenceEditState, position: GeoPoint, at: Instant) {
    let action = state.drawing.on_move(position, at);
    apply_action(state, action);
}

pub fn double_click(state: &mut FenceEditState, position: GeoPoint, at: Instant) {
    let action = state.drawing.on_double_click(position, at);
    apply_action(state, action);
}

pub fn tick(state: &mut FenceEditState, now: Instant) {
    let action = state.drawing.tick(now);
    apply_action(state, action);
}

pub fn finish(state: &mut FenceEditState, at: Instant) {
    let action = state.drawing.finish(at);
    apply_action(state, action);
}

pub fn undo_vertex(state: &mut FenceEditState, at: Instant) {
    let action = state.drawing.undo_vertex(at);
    apply_action(state, action);
}

pub fn clear(state: &mut FenceEditState) {
    let action = state.drawing.clear();
    apply_action(state, action);
}

/// Setzt das Ergebnis einer Zeichen-Operation im State um.
fn apply_action(state: &mut FenceEditState, action: DrawingAction) {
    match action {
        DrawingAction::Ignored | DrawingAction::Continue => {}
        DrawingAction::CapReached => {
            state.notice = Some(format!(
                "Maximal {} Eckpunkte möglich",
                state.options.max_vertices
            ));
        }
        DrawingAction::NeedMoreVertices { count } => {
            state.notice = Some(format!(
                "Mindestens 3 Eckpunkte nötig ({} gesetzt)",
                count
            ));
        }
        DrawingAction::ShapeChanged(update) => {
            apply_shape_update(state, InputSource::MapDrawing, update);
        }
        DrawingAction::Finished(shape) => {
            state.notice = None;
            log::info!(
                "Zeichnung abgeschlossen: {:?} mit {} Eckpunkten",
                shape.kind(),
                shape.vertex_count()
            );
            apply_shape_update(state, InputSource::MapDrawing, ShapeUpdate::Replaced(shape));
        }
    }
}

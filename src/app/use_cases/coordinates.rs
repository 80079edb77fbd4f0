//! Use-Cases für die manuelle Koordinaten-Eingabe.

use crate::app::tools::{CircleField, EditorAction, InputSource};
use crate::app::FenceEditState;
use crate::core::VertexField;

use super::shape_sync::apply_shape_update;

pub fn set_vertex_field(state: &mut FenceEditState, index: usize, field: VertexField, raw: &str) {
    let action = state.coordinate_input.set_vertex_field(index, field, raw);
    apply_action(state, action);
}

pub fn set_circle_field(state: &mut FenceEditState, field: CircleField, raw: &str) {
    let action = state.coordinate_input.set_circle_field(field, raw);
    apply_action(state, action);
}

pub fn add_vertex(state: &mut FenceEditState) {
    let action = state.coordinate_input.add_vertex();
    apply_action(state, action);
}

pub fn remove_vertex(state: &mut FenceEditState, index: usize) {
    let action = state.coordinate_input.remove_vertex(index);
    apply_action(state, action);
}

fn apply_action(state: &mut FenceEditState, action: EditorAction) {
    match action {
        EditorAction::Ignored | EditorAction::Continue => {}
        EditorAction::CapReached => {
            state.notice = Some(format!(
                "Maximal {} Eckpunkte möglich",
                state.options.max_vertices
            ));
        }
        EditorAction::ShapeChanged(update) => {
            state.notice = None;
            apply_shape_update(state, InputSource::CoordinateEntry, update);
        }
    }
}

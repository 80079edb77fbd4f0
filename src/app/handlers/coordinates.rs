//! Handler für die Koordinaten-Eingabe.

use crate::app::tools::CircleField;
use crate::app::use_cases;
use crate::app::FenceEditState;
use crate::core::VertexField;

pub fn set_vertex_field(state: &mut FenceEditState, index: usize, field: VertexField, raw: &str) {
    use_cases::coordinates::set_vertex_field(state, index, field, raw);
}

pub fn set_circle_field(state: &mut FenceEditState, field: CircleField, raw: &str) {
    use_cases::coordinates::set_circle_field(state, field, raw);
}

pub fn add_vertex(state: &mut FenceEditState) {
    use_cases::coordinates::add_vertex(state);
}

pub fn remove_vertex(state: &mut FenceEditState, index: usize) {
    use_cases::coordinates::remove_vertex(state, index);
}

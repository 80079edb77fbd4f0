//! Zustand einer Editor-Sitzung.

mod fence_state;
mod view;

pub use fence_state::{EditMode, FenceEditState, SaveOutcome};
pub use view::ViewState;

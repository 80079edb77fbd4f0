//! Application-Layer: Controller, State, Events, Use-Cases und Eingabe-Werkzeuge.

pub mod collaborators;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Zustand einer Editor-Sitzung (Form, Werkzeuge, View, Speichern-Ergebnis)
pub mod state;
pub mod sync_guard;
pub mod tools;
pub mod use_cases;

pub use collaborators::{FenceRepository, InMemoryFenceRepository, ShapeChangedSink};
pub use command_log::CommandLog;
pub use controller::FenceEditController;
pub use events::{FenceCommand, FenceIntent};
pub use state::{EditMode, FenceEditState, SaveOutcome, ViewState};
pub use sync_guard::SyncGuard;
pub use tools::{
    CircleField, CoordinateInputEditor, DrawingAction, DrawingMode, DrawingSession,
    EditorAction, FenceInputTool, InputSource, ShapeUpdate,
};

//! Geofence-Editor Library.
//! Geometrie, Validierung und Zeichen-Logik für Polygon- und Kreis-Zäune,
//! als Library exportiert für Host-UIs, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    EditMode, FenceCommand, FenceEditController, FenceEditState, FenceIntent, FenceRepository,
    InMemoryFenceRepository, InputSource, SaveOutcome, ShapeChangedSink,
};
pub use core::{
    frame_shape, validate_shape, FenceKind, FenceShape, GeoPoint, MapFraming, PersistedFence,
    ValidationFailure,
};
pub use shared::EditorOptions;

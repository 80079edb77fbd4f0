//! Eingabe-Werkzeuge für Zaun-Formen.
//!
//! Zwei alternative Modalitäten schreiben in dieselbe Form:
//! `DrawingSession` (Klicks/Bewegungen auf der Karte) und
//! `CoordinateInputEditor` (numerische Felder). Beide liefern reine Daten
//! (`ShapeUpdate`), die Übernahme erfolgt zentral im Controller.

/// Gemeinsame Hilfen (Klick-Entprellung).
pub mod common;
/// Manuelle Koordinaten-Eingabe (Eckpunkt-Felder bzw. Mittelpunkt + Radius).
pub mod coordinate_input;
/// Interaktives Zeichnen auf der Karte (Zustandsautomat).
pub mod drawing;
mod input_tool;

pub use coordinate_input::{
    CircleField, CircleFields, CoordinateInputEditor, EditorAction, VertexFields,
};
pub use drawing::{DrawingAction, DrawingMode, DrawingPreview, DrawingSession};
pub use input_tool::FenceInputTool;

use crate::core::{FenceKind, FenceShape, PersistedFence};

/// Herkunft einer Form-Änderung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Zeichnen auf der Karte
    MapDrawing,
    /// Manuelle Koordinaten-Eingabe
    CoordinateEntry,
}

impl InputSource {
    /// Die jeweils andere Modalität.
    pub fn other(self) -> Self {
        match self {
            InputSource::MapDrawing => InputSource::CoordinateEntry,
            InputSource::CoordinateEntry => InputSource::MapDrawing,
        }
    }
}

/// Ergebnis eines Werkzeugs, das die Zaun-Form betrifft.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeUpdate {
    /// Neue vollständige (oder als Vorschau gültige) Form
    Replaced(FenceShape),
    /// Form geleert, Typ bleibt erhalten (Payload mit `coordinates: null`)
    Cleared(FenceKind),
    /// Form verworfen (Payload `null`)
    Removed,
}

impl ShapeUpdate {
    /// Form, die nach der Übernahme gilt.
    pub fn into_shape(self) -> Option<FenceShape> {
        match self {
            ShapeUpdate::Replaced(shape) => Some(shape),
            ShapeUpdate::Cleared(kind) => Some(FenceShape::empty(kind)),
            ShapeUpdate::Removed => None,
        }
    }

    /// Payload für den Shape-Changed-Callback.
    pub fn payload(&self) -> Option<PersistedFence> {
        match self {
            ShapeUpdate::Replaced(shape) => Some(shape.to_persisted()),
            ShapeUpdate::Cleared(kind) => Some(PersistedFence::cleared(*kind)),
            ShapeUpdate::Removed => None,
        }
    }
}

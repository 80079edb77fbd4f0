//! Mutierende Commands, ausgeführt vom Controller.

use std::time::Instant;

use crate::app::state::EditMode;
use crate::app::tools::{CircleField, InputSource};
use crate::core::{FenceKind, GeoPoint, PersistedFence, VertexField};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die aus Intents abgeleitet werden.
#[derive(Debug, Clone)]
pub enum FenceCommand {
    // ── Sitzung ─────────────────────────────────────────────────
    /// Form, Werkzeuge und Sync-Zustand zurücksetzen
    ResetSession,
    /// Anlege- oder Bearbeiten-Modus setzen
    SetEditMode { mode: EditMode },
    /// Gespeicherten Zaun als vollständige Form übernehmen
    LoadFence { record: PersistedFence },
    /// Form validieren und speichern
    SaveFence,
    /// Flüchtige Eingaben (Klick-Timer, Vorschau) verwerfen
    CancelPendingInput,
    /// Aktive Modalität setzen
    SetInputMode { mode: InputSource },
    /// Zaun-Typ setzen
    SetFenceKind { kind: FenceKind },
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },

    // ── Karte ───────────────────────────────────────────────────
    StartDrawing { kind: FenceKind },
    DrawingClick { position: GeoPoint, at: Instant },
    DrawingMove { position: GeoPoint, at: Instant },
    DrawingDoubleClick { position: GeoPoint, at: Instant },
    DrawingTick { now: Instant },
    FinishDrawing { at: Instant },
    UndoVertex { at: Instant },
    ClearDrawing,

    // ── Koordinaten-Eingabe ─────────────────────────────────────
    SetVertexField {
        index: usize,
        field: VertexField,
        raw: String,
    },
    SetCircleField { field: CircleField, raw: String },
    AddVertexRow,
    RemoveVertexRow { index: usize },

    // ── Ansicht ─────────────────────────────────────────────────
    SetViewportSize { size: [f64; 2] },
    CenterOnShape,
}

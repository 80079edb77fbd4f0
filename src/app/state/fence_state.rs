use crate::app::sync_guard::SyncGuard;
use crate::app::tools::{CoordinateInputEditor, DrawingSession, FenceInputTool, InputSource};
use crate::app::CommandLog;
use crate::core::{FenceKind, FenceShape, PersistedFence, ValidationFailure};
use crate::shared::EditorOptions;

use super::ViewState;

/// Wurde der Editor für einen neuen oder einen vorhandenen Zaun geöffnet?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Neuer Zaun, Form startet leer
    #[default]
    Create,
    /// Vorhandener Zaun, Form aus dem gespeicherten Datensatz
    Edit,
}

/// Ergebnis einer Speichern-Anfrage.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Validiert und an das Repository übergeben
    Saved(PersistedFence),
    /// Validierung fehlgeschlagen, nichts gespeichert
    Rejected(ValidationFailure),
}

/// Hauptzustand einer Zaun-Bearbeitung
pub struct FenceEditState {
    /// Maßgebliche Form (None = nichts gezeichnet)
    pub shape: Option<FenceShape>,
    /// Gewählter Zaun-Typ
    pub kind: FenceKind,
    /// Aktive Eingabe-Modalität
    pub input_mode: InputSource,
    /// Anlegen oder Bearbeiten
    pub edit_mode: EditMode,
    /// Zeichen-Sitzung auf der Karte
    pub drawing: DrawingSession,
    /// Manuelle Koordinaten-Eingabe
    pub coordinate_input: CoordinateInputEditor,
    /// Schutz gegen Rückkopplung beim Abgleich
    pub sync: SyncGuard,
    /// View-State
    pub view: ViewState,
    /// Ergebnis des letzten Speicherns
    pub last_save: Option<SaveOutcome>,
    /// Hinweis für das Host-UI (Limit erreicht, zu wenige Eckpunkte, ...)
    pub notice: Option<String>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Noch nicht zugestellte Shape-Changed-Payloads
    pub(crate) outbox: Vec<Option<PersistedFence>>,
}

impl FenceEditState {
    /// Erstellt einen leeren State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            shape: None,
            kind: FenceKind::default(),
            input_mode: InputSource::MapDrawing,
            edit_mode: EditMode::default(),
            drawing: DrawingSession::new(&options),
            coordinate_input: CoordinateInputEditor::new(&options),
            sync: SyncGuard::new(),
            view: ViewState::new(),
            last_save: None,
            notice: None,
            command_log: CommandLog::new(),
            options,
            outbox: Vec::new(),
        }
    }

    /// Maßgebliche Form im Wire-Format (`None` = keine Form).
    pub fn payload(&self) -> Option<PersistedFence> {
        self.shape.as_ref().map(FenceShape::to_persisted)
    }

    /// Hinweistext der aktiven Modalität.
    pub fn status_text(&self) -> &str {
        match self.input_mode {
            InputSource::MapDrawing => self.drawing.status_text(),
            InputSource::CoordinateEntry => self.coordinate_input.status_text(),
        }
    }

    /// Werkzeug einer Modalität als Trait-Objekt.
    pub(crate) fn tool_mut(&mut self, source: InputSource) -> &mut dyn FenceInputTool {
        match source {
            InputSource::MapDrawing => &mut self.drawing,
            InputSource::CoordinateEntry => &mut self.coordinate_input,
        }
    }
}

impl Default for FenceEditState {
    fn default() -> Self {
        Self::new()
    }
}

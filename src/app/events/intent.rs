//! Eingaben aus Host-UI und System.

use std::time::Instant;

use crate::app::tools::{CircleField, InputSource};
use crate::core::{FenceKind, GeoPoint, PersistedFence, VertexField};
use crate::shared::EditorOptions;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum FenceIntent {
    // ── Sitzung ─────────────────────────────────────────────────
    /// Editor im Anlege-Modus öffnen
    CreateRequested {
        /// Start-Typ des neuen Zauns
        kind: FenceKind,
    },
    /// Editor mit gespeichertem Zaun öffnen
    LoadFenceRequested {
        /// Gespeicherter Datensatz
        record: PersistedFence,
    },
    /// Speichern anfordern (Validierung + Repository)
    SaveRequested,
    /// Editor ohne Speichern schließen
    CloseRequested,
    /// Zwischen Karten-Zeichnen und Koordinaten-Eingabe wechseln
    InputModeChanged {
        /// Neue aktive Modalität
        mode: InputSource,
    },
    /// Zaun-Typ wechseln (verwirft den anderen Typ)
    FenceKindChanged {
        /// Neuer Typ
        kind: FenceKind,
    },
    /// Laufzeit-Optionen übernehmen
    OptionsChanged {
        /// Neue Optionen
        options: EditorOptions,
    },

    // ── Karte ───────────────────────────────────────────────────
    /// Zeichnen starten ("Polygon" / "Kreis"-Button)
    StartDrawingRequested {
        /// Zu zeichnender Typ
        kind: FenceKind,
    },
    /// Einfach-Klick auf der Karte
    MapClicked {
        /// Geografische Position
        position: GeoPoint,
        /// Zeitpunkt des Events
        at: Instant,
    },
    /// Zeigerbewegung über der Karte
    MapPointerMoved {
        /// Geografische Position
        position: GeoPoint,
        /// Zeitpunkt des Events
        at: Instant,
    },
    /// Doppelklick auf der Karte
    MapDoubleClicked {
        /// Geografische Position
        position: GeoPoint,
        /// Zeitpunkt des Events
        at: Instant,
    },
    /// Timer-Tick des Hosts (übernimmt abgelaufene Einfach-Klicks)
    TimerTick {
        /// Aktueller Zeitpunkt
        now: Instant,
    },
    /// "Fertig"-Button
    FinishDrawingRequested {
        /// Zeitpunkt des Events
        at: Instant,
    },
    /// Letzten Eckpunkt zurücknehmen
    UndoVertexRequested {
        /// Zeitpunkt des Events
        at: Instant,
    },
    /// Zeichnung verwerfen
    ClearDrawingRequested,

    // ── Koordinaten-Eingabe ─────────────────────────────────────
    /// Eckpunkt-Feld geändert
    VertexFieldEdited {
        /// 0-basierter Zeilen-Index
        index: usize,
        /// Breite oder Länge
        field: VertexField,
        /// Roh-Eingabe
        raw: String,
    },
    /// Kreis-Feld geändert
    CircleFieldEdited {
        /// Mittelpunkt-Breite, -Länge oder Radius
        field: CircleField,
        /// Roh-Eingabe
        raw: String,
    },
    /// Leere Eckpunkt-Zeile anhängen
    AddVertexRequested,
    /// Eckpunkt-Zeile entfernen
    RemoveVertexRequested {
        /// 0-basierter Zeilen-Index
        index: usize,
    },

    // ── Ansicht ─────────────────────────────────────────────────
    /// Kartengröße geändert
    ViewportResized {
        /// Breite/Höhe in Pixeln
        size: [f64; 2],
    },
    /// Karte auf den Zaun zentrieren
    CenterOnShapeRequested,
}

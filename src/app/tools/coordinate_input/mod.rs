//! Manuelle Koordinaten-Eingabe als Alternative zum Zeichnen auf der Karte.
//!
//! **Polygon:** ein Feldpaar (Breite/Länge) je Eckpunkt, Start mit 3 leeren
//! Zeilen, max. 20 Zeilen. **Kreis:** Mittelpunkt-Breite, Mittelpunkt-Länge
//! und Radius.
//!
//! Eine Änderung wird erst gemeldet, wenn alle Felder gleichzeitig gültig
//! sind. Teil-Eingaben erzeugen kein Signal nach außen.
//!
//! Aufgeteilt in:
//! - `state`      : Feld-Structs, Editor-State, Konstruktor, Abfragen
//! - `lifecycle`  : Feld-Eingaben, Zeilen hinzufügen/entfernen, FenceInputTool-Implementierung

mod lifecycle;
mod state;

pub use state::{CircleField, CircleFields, CoordinateInputEditor, EditorAction, VertexFields};

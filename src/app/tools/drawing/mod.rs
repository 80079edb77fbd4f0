//! Zeichen-Sitzung: Polygon- und Kreis-Zeichnen per Karten-Zeiger.
//!
//! **Polygon:** Start → Klick je Eckpunkt (max. 20) → Doppelklick oder
//! "Fertig" ab 3 Eckpunkten. Zwischen letztem Eckpunkt und Cursor wird eine
//! Gummiband-Linie angezeigt.
//! **Kreis:** Start → Klick setzt Mittelpunkt mit 100 m Radius → Mausbewegung
//! zieht den Radius auf → Klick/Doppelklick übernimmt.
//!
//! Einfach-Klicks im Polygon-Modus werden erst nach dem Doppelklick-Fenster
//! wirksam (`ClickDebounce`), damit der Doppelklick keinen Eckpunkt erzeugt.
//!
//! Aufgeteilt in:
//! - `state`      : Structs, Enums, Konstruktor, Abfragen
//! - `lifecycle`  : Zeiger-Events, Kommandos, FenceInputTool-Implementierung
//! - `preview`    : Vorschau-Geometrie für das Rendering

mod lifecycle;
mod preview;
mod state;

pub use preview::DrawingPreview;
pub use state::{DrawingAction, DrawingMode, DrawingSession};

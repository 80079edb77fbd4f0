//! FenceInputTool-Trait: gemeinsame Schnittstelle beider Eingabe-Modalitäten.

use crate::core::FenceShape;

use super::{InputSource, ShapeUpdate};

/// Schnittstelle, über die der Controller eine Modalität mit der
/// maßgeblichen Form abgleicht.
pub trait FenceInputTool {
    /// Welche Modalität ist das?
    fn source(&self) -> InputSource;

    /// Übernimmt die maßgebliche Form in den Anzeige-Zustand.
    ///
    /// `generation` stammt aus dem Sync-Guard des Controllers. Die Rückgabe
    /// ist die Form, die das Werkzeug nach dem Abgleich selbst ableitet;
    /// der Controller erkennt sie als Echo und verwirft sie.
    fn sync_from_shape(&mut self, shape: Option<&FenceShape>, generation: u64)
        -> Option<ShapeUpdate>;

    /// Generation des letzten Abgleichs (0 = nie abgeglichen).
    fn synced_generation(&self) -> u64;

    /// Verwirft flüchtige Eingaben (Klick-Timer, Vorschau), Daten bleiben.
    fn cancel_pending(&mut self) {}

    /// Hat das Werkzeug angefangene, noch nicht übernommene Eingaben?
    fn has_pending_input(&self) -> bool {
        false
    }

    /// Setzt das Werkzeug vollständig zurück (Editor geschlossen).
    fn reset(&mut self);

    /// Kurzer Hinweis für das Host-UI (z.B. "Startpunkt klicken").
    fn status_text(&self) -> &str;
}

use crate::core::MapFraming;

/// View-bezogener Zustand der Karte.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixeln
    pub viewport_size: [f64; 2],
    /// Letzter berechneter Ausschnitt für "Auf Zaun zentrieren"
    pub framing: Option<MapFraming>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [800.0, 600.0],
            framing: None,
        }
    }
}

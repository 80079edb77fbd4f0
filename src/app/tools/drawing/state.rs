//! State-Definitionen und Konstruktor der Zeichen-Sitzung.

use super::super::common::ClickDebounce;
use super::super::ShapeUpdate;
use crate::core::{FenceShape, GeoPoint};
use crate::shared::EditorOptions;

/// Phase der Zeichen-Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    /// Keine Zeichnung aktiv
    #[default]
    Idle,
    /// Polygon-Eckpunkte werden gesetzt
    DrawingPolygon,
    /// Kreis: wartet auf den Mittelpunkt-Klick
    DrawingCircleSettingCenter,
    /// Kreis: Radius folgt dem Cursor
    DrawingCircleAdjustingRadius,
}

impl DrawingMode {
    /// Ist eine Zeichnung aktiv?
    pub fn is_drawing(self) -> bool {
        self != DrawingMode::Idle
    }
}

/// Rückgabe der Event-Methoden, steuert den Controller.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingAction {
    /// Event ohne Wirkung
    Ignored,
    /// Interner Zustand geändert, weitere Eingabe nötig
    Continue,
    /// Eckpunkt-Limit erreicht, Klick verworfen
    CapReached,
    /// "Fertig" mit zu wenigen Eckpunkten, Sitzung bleibt offen
    NeedMoreVertices {
        /// Aktuelle Anzahl Eckpunkte
        count: usize,
    },
    /// Form hat sich geändert (Kreis-Vorschau, Verwerfen)
    ShapeChanged(ShapeUpdate),
    /// Zeichnung abgeschlossen
    Finished(FenceShape),
}

/// Zustandsautomat für das Zeichnen auf der Karte.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    pub(crate) mode: DrawingMode,
    /// Eckpunkte der laufenden (bzw. zuletzt angezeigten) Polygon-Zeichnung
    pub(crate) pending_vertices: Vec<GeoPoint>,
    pub(crate) circle_center: Option<GeoPoint>,
    pub(crate) circle_radius: Option<f64>,
    /// Letzte Zeigerposition, nur für die Gummiband-Linie
    pub(crate) preview_cursor: Option<GeoPoint>,
    pub(crate) is_complete: bool,
    pub(crate) clicks: ClickDebounce,
    pub(crate) max_vertices: usize,
    pub(crate) default_radius_m: f64,
    pub(crate) synced_generation: u64,
}

impl DrawingSession {
    /// Erstellt eine leere Sitzung mit Limits aus den Optionen.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            mode: DrawingMode::Idle,
            pending_vertices: Vec::new(),
            circle_center: None,
            circle_radius: None,
            preview_cursor: None,
            is_complete: false,
            clicks: ClickDebounce::new(options.double_click_window()),
            max_vertices: options.max_vertices,
            default_radius_m: options.default_circle_radius_m,
            synced_generation: 0,
        }
    }

    /// Übernimmt geänderte Optionen (laufende Zeichnung bleibt erhalten).
    pub fn apply_options(&mut self, options: &EditorOptions) {
        self.clicks.set_window(options.double_click_window());
        self.max_vertices = options.max_vertices;
        self.default_radius_m = options.default_circle_radius_m;
    }

    /// Aktuelle Phase.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Bereits übernommene Polygon-Eckpunkte.
    pub fn pending_vertices(&self) -> &[GeoPoint] {
        &self.pending_vertices
    }

    /// Kreismittelpunkt.
    pub fn circle_center(&self) -> Option<GeoPoint> {
        self.circle_center
    }

    /// Kreisradius in Metern.
    pub fn circle_radius(&self) -> Option<f64> {
        self.circle_radius
    }

    /// Letzte Zeigerposition während des Zeichnens.
    pub fn preview_cursor(&self) -> Option<GeoPoint> {
        self.preview_cursor
    }

    /// Ist die Zeichnung abgeschlossen?
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Wartet ein Einfach-Klick noch auf das Ende des Doppelklick-Fensters?
    pub fn has_pending_click(&self) -> bool {
        self.clicks.is_pending()
    }

    /// Kann noch ein Eckpunkt gesetzt werden?
    pub fn can_add_vertex(&self) -> bool {
        self.pending_vertices.len() < self.max_vertices
    }

    /// Form, die die Sitzung gerade darstellt (Kreis auch unvollständig).
    pub fn current_shape(&self) -> Option<FenceShape> {
        match self.mode {
            DrawingMode::DrawingCircleSettingCenter | DrawingMode::DrawingCircleAdjustingRadius => {
                self.circle_shape()
            }
            DrawingMode::DrawingPolygon => {
                (!self.pending_vertices.is_empty()).then(|| self.polygon_shape())
            }
            DrawingMode::Idle => {
                if self.circle_center.is_some() {
                    self.circle_shape()
                } else if !self.pending_vertices.is_empty() {
                    Some(self.polygon_shape())
                } else {
                    None
                }
            }
        }
    }

    pub(crate) fn polygon_shape(&self) -> FenceShape {
        FenceShape::polygon(self.pending_vertices.clone())
    }

    pub(crate) fn circle_shape(&self) -> Option<FenceShape> {
        let center = self.circle_center?;
        Some(FenceShape::Circle {
            center: Some(center),
            radius_meters: self.circle_radius,
        })
    }

    /// Enthält die Sitzung Daten (übernommen oder ausstehend)?
    pub(crate) fn has_data(&self) -> bool {
        !self.pending_vertices.is_empty()
            || self.circle_center.is_some()
            || self.clicks.is_pending()
    }

    /// Verwirft alle Geometrie-Daten (nicht den Modus).
    pub(crate) fn discard_data(&mut self) {
        self.clicks.cancel();
        self.pending_vertices.clear();
        self.circle_center = None;
        self.circle_radius = None;
        self.preview_cursor = None;
        self.is_complete = false;
    }
}

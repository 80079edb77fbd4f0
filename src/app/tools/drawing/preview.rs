//! Vorschau-Geometrie der Zeichen-Sitzung.

use super::state::{DrawingMode, DrawingSession};
use crate::core::GeoPoint;

/// Was der Host während des Zeichnens auf der Karte darstellen soll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingPreview {
    /// Übernommene Polygon-Eckpunkte (inkl. vorgemerktem Klick)
    pub vertices: Vec<GeoPoint>,
    /// Gummiband von letztem Eckpunkt zum Cursor
    pub rubber_band: Option<(GeoPoint, GeoPoint)>,
    /// Kreis als (Mittelpunkt, Radius in Metern)
    pub circle: Option<(GeoPoint, f64)>,
}

impl DrawingPreview {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.rubber_band.is_none() && self.circle.is_none()
    }
}

impl DrawingSession {
    /// Vorschau für den aktuellen Zustand.
    pub fn preview(&self) -> DrawingPreview {
        let mut vertices = self.pending_vertices.clone();
        if let Some(click) = self.clicks.pending() {
            vertices.push(click.position);
        }

        let rubber_band = match (self.mode, vertices.last(), self.preview_cursor) {
            (DrawingMode::DrawingPolygon, Some(&last), Some(cursor)) => Some((last, cursor)),
            _ => None,
        };

        let circle = match (self.circle_center, self.circle_radius) {
            (Some(center), Some(radius)) => Some((center, radius)),
            _ => None,
        };

        DrawingPreview {
            vertices,
            rubber_band,
            circle,
        }
    }
}

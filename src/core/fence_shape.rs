//! Kanonisches Zaun-Modell: Polygon (Eckpunkt-Liste) oder Kreis (Mittelpunkt + Radius).
//!
//! Alle Mutatoren sind rein und liefern eine neue Form. Kapazitätsgrenzen
//! (max. Eckpunkte) werden vom Aufrufer durchgesetzt.

use serde::{Deserialize, Serialize};

use super::geo_point::GeoPoint;
use super::validation::{is_valid_radius, MIN_POLYGON_VERTICES};

/// Variante eines Zauns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FenceKind {
    /// Polygon-Zaun
    #[default]
    Polygon,
    /// Kreis-Zaun
    Circle,
}

/// Koordinaten-Komponente eines einzelnen Eckpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexField {
    /// Breitengrad
    Latitude,
    /// Längengrad
    Longitude,
}

/// Form eines Zauns.
#[derive(Debug, Clone, PartialEq)]
pub enum FenceShape {
    /// Geordnete Eckpunkte (0..=20)
    Polygon {
        /// Eckpunkte in Zeichenreihenfolge
        vertices: Vec<GeoPoint>,
    },
    /// Kreis, Mittelpunkt und Radius können einzeln fehlen
    Circle {
        /// Mittelpunkt
        center: Option<GeoPoint>,
        /// Radius in Metern
        radius_meters: Option<f64>,
    },
}

impl FenceShape {
    /// Leere Form der gewünschten Variante.
    pub fn empty(kind: FenceKind) -> Self {
        match kind {
            FenceKind::Polygon => FenceShape::Polygon {
                vertices: Vec::new(),
            },
            FenceKind::Circle => FenceShape::Circle {
                center: None,
                radius_meters: None,
            },
        }
    }

    /// Polygon aus einer Eckpunkt-Liste.
    pub fn polygon(vertices: Vec<GeoPoint>) -> Self {
        FenceShape::Polygon { vertices }
    }

    /// Vollständiger Kreis.
    pub fn circle(center: GeoPoint, radius_meters: f64) -> Self {
        FenceShape::Circle {
            center: Some(center),
            radius_meters: Some(radius_meters),
        }
    }

    /// Variante der Form.
    pub fn kind(&self) -> FenceKind {
        match self {
            FenceShape::Polygon { .. } => FenceKind::Polygon,
            FenceShape::Circle { .. } => FenceKind::Circle,
        }
    }

    /// Eckpunkte (leer bei Kreisen).
    pub fn vertices(&self) -> &[GeoPoint] {
        match self {
            FenceShape::Polygon { vertices } => vertices,
            FenceShape::Circle { .. } => &[],
        }
    }

    /// Anzahl der Eckpunkte (0 bei Kreisen).
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Ist die Form als Zaun benutzbar?
    ///
    /// Polygon: mindestens 3 Eckpunkte. Kreis: Mittelpunkt und Radius gesetzt,
    /// Radius im zulässigen Bereich.
    pub fn is_complete(&self) -> bool {
        match self {
            FenceShape::Polygon { vertices } => vertices.len() >= MIN_POLYGON_VERTICES,
            FenceShape::Circle {
                center,
                radius_meters,
            } => center.is_some() && radius_meters.is_some() && is_valid_radius(*radius_meters),
        }
    }

    /// Hängt einen Eckpunkt an (nur Polygon; Kreise bleiben unverändert).
    pub fn with_vertex_appended(&self, vertex: GeoPoint) -> Self {
        match self {
            FenceShape::Polygon { vertices } => {
                let mut vertices = vertices.clone();
                vertices.push(vertex);
                FenceShape::Polygon { vertices }
            }
            FenceShape::Circle { .. } => {
                log::debug!("Eckpunkt an Kreis-Form ignoriert");
                self.clone()
            }
        }
    }

    /// Entfernt den Eckpunkt bei `index`. Ungültige Indizes ändern nichts.
    pub fn with_vertex_removed(&self, index: usize) -> Self {
        match self {
            FenceShape::Polygon { vertices } if index < vertices.len() => {
                let mut vertices = vertices.clone();
                vertices.remove(index);
                FenceShape::Polygon { vertices }
            }
            _ => self.clone(),
        }
    }

    /// Setzt eine Komponente eines Eckpunkts, alle anderen bleiben erhalten.
    pub fn with_vertex_field_updated(&self, index: usize, field: VertexField, value: f64) -> Self {
        match self {
            FenceShape::Polygon { vertices } if index < vertices.len() => {
                let mut vertices = vertices.clone();
                let vertex = &mut vertices[index];
                match field {
                    VertexField::Latitude => vertex.latitude = value,
                    VertexField::Longitude => vertex.longitude = value,
                }
                FenceShape::Polygon { vertices }
            }
            _ => self.clone(),
        }
    }

    /// Ersetzt Mittelpunkt und Radius komplett (erzeugt immer einen Kreis).
    pub fn with_circle_updated(
        &self,
        center: Option<GeoPoint>,
        radius_meters: Option<f64>,
    ) -> Self {
        FenceShape::Circle {
            center,
            radius_meters,
        }
    }
}

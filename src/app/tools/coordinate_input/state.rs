//! State-Definitionen und Konstruktor des Koordinaten-Editors.

use super::super::ShapeUpdate;
use crate::core::{
    CoordinateField, FenceKind, FenceShape, FieldKind, GeoPoint, VertexField,
    MIN_POLYGON_VERTICES,
};
use crate::shared::EditorOptions;

/// Anzahl leerer Zeilen beim Öffnen des Polygon-Editors.
pub(crate) const INITIAL_ROWS: usize = 3;

/// Feldpaar eines Polygon-Eckpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VertexFields {
    /// Breitengrad-Feld
    pub latitude: CoordinateField,
    /// Längengrad-Feld
    pub longitude: CoordinateField,
}

impl VertexFields {
    /// Zeile aus einem vorhandenen Punkt (Werte werden neu klassifiziert).
    pub fn from_point(point: GeoPoint) -> Self {
        Self {
            latitude: FieldKind::Latitude.classify(Some(point.latitude)),
            longitude: FieldKind::Longitude.classify(Some(point.longitude)),
        }
    }

    /// Punkt, sofern beide Felder gültig sind.
    pub fn point(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(
            self.latitude.valid_value()?,
            self.longitude.valid_value()?,
        ))
    }

    /// Sind beide Felder gültig?
    pub fn is_valid(&self) -> bool {
        self.latitude.is_valid() && self.longitude.is_valid()
    }

    pub(crate) fn field_mut(&mut self, field: VertexField) -> &mut CoordinateField {
        match field {
            VertexField::Latitude => &mut self.latitude,
            VertexField::Longitude => &mut self.longitude,
        }
    }
}

/// Feld der Kreis-Eingabe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleField {
    /// Breitengrad des Mittelpunkts
    CenterLatitude,
    /// Längengrad des Mittelpunkts
    CenterLongitude,
    /// Radius in Metern
    Radius,
}

impl CircleField {
    /// Wertebereich des Feldes.
    pub fn kind(self) -> FieldKind {
        match self {
            CircleField::CenterLatitude => FieldKind::Latitude,
            CircleField::CenterLongitude => FieldKind::Longitude,
            CircleField::Radius => FieldKind::Radius,
        }
    }
}

/// Felder der Kreis-Eingabe.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CircleFields {
    /// Breite des Mittelpunkts
    pub center_latitude: CoordinateField,
    /// Länge des Mittelpunkts
    pub center_longitude: CoordinateField,
    /// Radius in Metern
    pub radius: CoordinateField,
}

impl CircleFields {
    /// Felder aus Mittelpunkt und Radius (fehlende Werte bleiben leer).
    pub fn from_circle(center: Option<GeoPoint>, radius_meters: Option<f64>) -> Self {
        Self {
            center_latitude: FieldKind::Latitude.classify(center.map(|c| c.latitude)),
            center_longitude: FieldKind::Longitude.classify(center.map(|c| c.longitude)),
            radius: FieldKind::Radius.classify(radius_meters),
        }
    }

    /// Kreis, sofern alle drei Felder gültig sind.
    pub fn shape(&self) -> Option<FenceShape> {
        let center = GeoPoint::new(
            self.center_latitude.valid_value()?,
            self.center_longitude.valid_value()?,
        );
        Some(FenceShape::circle(center, self.radius.valid_value()?))
    }

    pub(crate) fn field_mut(&mut self, field: CircleField) -> &mut CoordinateField {
        match field {
            CircleField::CenterLatitude => &mut self.center_latitude,
            CircleField::CenterLongitude => &mut self.center_longitude,
            CircleField::Radius => &mut self.radius,
        }
    }
}

/// Rückgabe der Editor-Operationen.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Operation ohne Wirkung (falscher Typ, Index außerhalb)
    Ignored,
    /// Felder geändert, keine Meldung nach außen
    Continue,
    /// Eckpunkt-Limit erreicht, keine Zeile hinzugefügt
    CapReached,
    /// Form geändert, Controller übernimmt
    ShapeChanged(ShapeUpdate),
}

/// Formular-Zustand der manuellen Koordinaten-Eingabe.
#[derive(Debug, Clone)]
pub struct CoordinateInputEditor {
    pub(crate) kind: FenceKind,
    pub(crate) rows: Vec<VertexFields>,
    pub(crate) circle: CircleFields,
    pub(crate) max_vertices: usize,
    pub(crate) synced_generation: u64,
}

impl CoordinateInputEditor {
    /// Leerer Polygon-Editor mit drei leeren Zeilen.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            kind: FenceKind::Polygon,
            rows: vec![VertexFields::default(); INITIAL_ROWS],
            circle: CircleFields::default(),
            max_vertices: options.max_vertices,
            synced_generation: 0,
        }
    }

    /// Übernimmt geänderte Optionen. Vorhandene Zeilen bleiben erhalten.
    pub fn apply_options(&mut self, options: &EditorOptions) {
        self.max_vertices = options.max_vertices;
    }

    /// Aktuell bearbeiteter Zaun-Typ.
    pub fn kind(&self) -> FenceKind {
        self.kind
    }

    /// Eckpunkt-Zeilen (nur Polygon relevant).
    pub fn rows(&self) -> &[VertexFields] {
        &self.rows
    }

    /// Kreis-Felder (nur Kreis relevant).
    pub fn circle_fields(&self) -> &CircleFields {
        &self.circle
    }

    /// Anzahl Zeilen mit zwei gültigen Feldern.
    pub fn valid_vertex_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_valid()).count()
    }

    /// 0-basierte Indizes der Zeilen mit mindestens einem ungültigen Wert.
    pub fn invalid_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                matches!(row.latitude, CoordinateField::Invalid(_))
                    || matches!(row.longitude, CoordinateField::Invalid(_))
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Kann noch eine Zeile hinzugefügt werden?
    pub fn can_add_vertex(&self) -> bool {
        self.rows.len() < self.max_vertices
    }

    /// Form, die die Felder vollständig beschreiben.
    ///
    /// `None` solange ein Feld leer/ungültig ist oder (Polygon) weniger als
    /// drei Zeilen existieren.
    pub fn current_shape(&self) -> Option<FenceShape> {
        match self.kind {
            FenceKind::Polygon => {
                if self.rows.len() < MIN_POLYGON_VERTICES {
                    return None;
                }
                let vertices = self
                    .rows
                    .iter()
                    .map(VertexFields::point)
                    .collect::<Option<Vec<_>>>()?;
                Some(FenceShape::polygon(vertices))
            }
            FenceKind::Circle => self.circle.shape(),
        }
    }

    /// Setzt alle Felder für `kind` zurück.
    pub(crate) fn clear_fields(&mut self, kind: FenceKind) {
        self.kind = kind;
        self.rows = vec![VertexFields::default(); INITIAL_ROWS];
        self.circle = CircleFields::default();
    }
}

//! Validierung von Koordinaten, Radius und kompletten Zaun-Formen.
//!
//! Alle Funktionen sind zustandslos. Ein fehlender Wert (`None`) gilt als
//! "nicht gesetzt" und ist kein Validierungsfehler; erst `validate_shape`
//! verlangt Vollständigkeit.

use std::fmt;

use super::fence_shape::FenceShape;

/// Gültiger Breitengrad-Bereich in Grad.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Gültiger Längengrad-Bereich in Grad.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
/// Kleinster zulässiger Kreisradius in Metern.
pub const MIN_RADIUS_METERS: f64 = 10.0;
/// Größter zulässiger Kreisradius in Metern.
pub const MAX_RADIUS_METERS: f64 = 100_000.0;
/// Mindestanzahl Eckpunkte eines benutzbaren Polygons.
pub const MIN_POLYGON_VERTICES: usize = 3;

fn within(v: f64, (min, max): (f64, f64)) -> bool {
    (min..=max).contains(&v)
}

/// `true` wenn `v` fehlt oder im Bereich -180..=180 liegt.
pub fn is_valid_longitude(v: Option<f64>) -> bool {
    v.is_none_or(|v| within(v, LONGITUDE_RANGE))
}

/// `true` wenn `v` fehlt oder im Bereich -90..=90 liegt.
pub fn is_valid_latitude(v: Option<f64>) -> bool {
    v.is_none_or(|v| within(v, LATITUDE_RANGE))
}

/// `true` wenn `v` fehlt oder im Bereich 10..=100000 liegt.
pub fn is_valid_radius(v: Option<f64>) -> bool {
    v.is_none_or(|v| within(v, (MIN_RADIUS_METERS, MAX_RADIUS_METERS)))
}

/// Art eines numerischen Eingabefelds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Breitengrad
    Latitude,
    /// Längengrad
    Longitude,
    /// Kreisradius in Metern
    Radius,
}

impl FieldKind {
    /// Prüft einen gesetzten Wert gegen den Bereich des Feldes.
    pub fn accepts(self, v: f64) -> bool {
        match self {
            FieldKind::Latitude => is_valid_latitude(Some(v)),
            FieldKind::Longitude => is_valid_longitude(Some(v)),
            FieldKind::Radius => is_valid_radius(Some(v)),
        }
    }

    /// Ordnet einen optionalen Wert einem der drei Feldzustände zu.
    pub fn classify(self, value: Option<f64>) -> CoordinateField {
        match value {
            None => CoordinateField::Empty,
            Some(v) if self.accepts(v) => CoordinateField::Valid(v),
            Some(v) => CoordinateField::Invalid(v),
        }
    }

    /// Parst eine Roh-Eingabe aus einem Formularfeld.
    ///
    /// Leere oder nicht parsebare Eingaben ergeben `Empty`.
    pub fn parse(self, raw: &str) -> CoordinateField {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CoordinateField::Empty;
        }
        self.classify(trimmed.parse::<f64>().ok())
    }
}

/// Zustand eines numerischen Eingabefelds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CoordinateField {
    /// Noch nichts eingegeben
    #[default]
    Empty,
    /// Wert außerhalb des zulässigen Bereichs
    Invalid(f64),
    /// Gültiger Wert
    Valid(f64),
}

impl CoordinateField {
    /// Gibt den Wert nur zurück, wenn er gültig ist.
    pub fn valid_value(self) -> Option<f64> {
        match self {
            CoordinateField::Valid(v) => Some(v),
            _ => None,
        }
    }

    /// Prüft ob das Feld gültig ist.
    pub fn is_valid(self) -> bool {
        matches!(self, CoordinateField::Valid(_))
    }

    /// Prüft ob das Feld leer ist.
    pub fn is_empty(self) -> bool {
        matches!(self, CoordinateField::Empty)
    }
}

/// Grund, warum eine Form nicht als Zaun gespeichert werden kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Keine Form vorhanden
    NoShape,
    /// Polygon mit weniger als drei Eckpunkten
    TooFewVertices {
        /// Tatsächliche Anzahl Eckpunkte
        count: usize,
    },
    /// Eckpunkt mit ungültiger Breite oder Länge (1-basiert)
    InvalidVertex {
        /// 1-basierter Index des ersten fehlerhaften Eckpunkts
        index: usize,
    },
    /// Kreismittelpunkt fehlt oder ist ungültig
    InvalidCenter,
    /// Radius fehlt oder liegt außerhalb von 10..=100000 m
    InvalidRadius,
}

impl ValidationFailure {
    /// Lesbarer Grund für die Anzeige im Host-UI.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::NoShape => write!(f, "no shape drawn"),
            ValidationFailure::TooFewVertices { .. } => write!(f, "needs at least 3 vertices"),
            ValidationFailure::InvalidVertex { index } => {
                write!(f, "vertex {index} has invalid coordinates")
            }
            ValidationFailure::InvalidCenter => write!(f, "missing/invalid center"),
            ValidationFailure::InvalidRadius => write!(f, "invalid radius"),
        }
    }
}

impl std::error::Error for ValidationFailure {}

/// Prüft eine Form auf Speicherbarkeit. Die erste verletzte Regel gewinnt:
///
/// 1. Form vorhanden
/// 2. Polygon: mindestens 3 Eckpunkte, danach jeder Eckpunkt im Bereich
/// 3. Kreis: Mittelpunkt vorhanden und gültig, danach Radius vorhanden und gültig
pub fn validate_shape(shape: Option<&FenceShape>) -> Result<(), ValidationFailure> {
    let Some(shape) = shape else {
        return Err(ValidationFailure::NoShape);
    };

    match shape {
        FenceShape::Polygon { vertices } => {
            if vertices.len() < MIN_POLYGON_VERTICES {
                return Err(ValidationFailure::TooFewVertices {
                    count: vertices.len(),
                });
            }
            if let Some(pos) = vertices.iter().position(|v| !v.is_valid()) {
                return Err(ValidationFailure::InvalidVertex { index: pos + 1 });
            }
            Ok(())
        }
        FenceShape::Circle {
            center,
            radius_meters,
        } => {
            match center {
                Some(c) if c.is_valid() => {}
                _ => return Err(ValidationFailure::InvalidCenter),
            }
            match radius_meters {
                Some(r) if is_valid_radius(Some(*r)) => Ok(()),
                _ => Err(ValidationFailure::InvalidRadius),
            }
        }
    }
}

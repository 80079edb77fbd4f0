//! Persistiertes Zaun-Format (Speicher-Datensatz und Callback-Payload).
//!
//! Wire-Format: `{ "type", "coordinates", "center", "radius" }`, Koordinaten
//! immer als `[lat, lng]`. Alle vier Schlüssel werden geschrieben, nicht
//! genutzte als `null`.

use serde::{Deserialize, Serialize};

use super::fence_shape::{FenceKind, FenceShape};
use super::geo_point::GeoPoint;

/// Gespeicherter Zaun bzw. Payload des Shape-Changed-Callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedFence {
    /// `"polygon"` oder `"circle"`
    #[serde(rename = "type")]
    pub kind: FenceKind,
    /// Polygon-Eckpunkte als `[lat, lng]`, sonst `null`
    #[serde(default)]
    pub coordinates: Option<Vec<[f64; 2]>>,
    /// Kreismittelpunkt als `[lat, lng]`, sonst `null`
    #[serde(default)]
    pub center: Option<[f64; 2]>,
    /// Kreisradius in Metern, sonst `null`
    #[serde(default, serialize_with = "serialize_radius")]
    pub radius: Option<f64>,
}

/// Ganzzahlige Radien ohne Nachkommastelle (`100`, nicht `100.0`), wie der Host sie schreibt.
fn serialize_radius<S>(radius: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;
    match *radius {
        Some(r) if r.fract() == 0.0 && r.abs() < MAX_EXACT_INTEGER => {
            serializer.serialize_some(&(r as i64))
        }
        other => other.serialize(serializer),
    }
}

impl PersistedFence {
    /// Payload für eine geleerte Form: Typ bleibt, alle Geometrie-Felder `null`.
    pub fn cleared(kind: FenceKind) -> Self {
        Self {
            kind,
            coordinates: None,
            center: None,
            radius: None,
        }
    }

    /// Liest einen Datensatz aus JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Schreibt den Datensatz als JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FenceShape {
    /// Baut eine Form aus einem gespeicherten Datensatz (ohne Validierung).
    pub fn from_persisted(record: &PersistedFence) -> Self {
        match record.kind {
            FenceKind::Polygon => FenceShape::Polygon {
                vertices: record
                    .coordinates
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(|&pair| GeoPoint::from_lat_lng(pair))
                    .collect(),
            },
            FenceKind::Circle => FenceShape::Circle {
                center: record.center.map(GeoPoint::from_lat_lng),
                radius_meters: record.radius,
            },
        }
    }

    /// Gegenrichtung zu [`FenceShape::from_persisted`].
    ///
    /// Ein Polygon ohne Eckpunkte wird als `coordinates: null` geschrieben.
    pub fn to_persisted(&self) -> PersistedFence {
        match self {
            FenceShape::Polygon { vertices } => PersistedFence {
                kind: FenceKind::Polygon,
                coordinates: (!vertices.is_empty())
                    .then(|| vertices.iter().map(|v| v.to_lat_lng()).collect()),
                center: None,
                radius: None,
            },
            FenceShape::Circle {
                center,
                radius_meters,
            } => PersistedFence {
                kind: FenceKind::Circle,
                coordinates: None,
                center: center.map(GeoPoint::to_lat_lng),
                radius: *radius_meters,
            },
        }
    }
}

//! Geografischer Punkt (Breite/Länge) als kanonische interne Darstellung.
//!
//! Am Rand des Kerns existieren zwei Tupel-Reihenfolgen: `[lat, lng]` im
//! persistierten Format bzw. Callback-Payload und `[lng, lat]` bei manchen
//! Geometrie-Aufrufern. Intern wird ausschließlich `GeoPoint` verwendet,
//! die Konvertierungen sind explizit benannt.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Punkt in WGS84-Grad.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad (gültig: -90..=90)
    pub latitude: f64,
    /// Längengrad in Grad (gültig: -180..=180)
    pub longitude: f64,
}

impl GeoPoint {
    /// Erstellt einen Punkt aus Breite und Länge.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Liest ein `[lat, lng]`-Paar (persistiertes Format).
    pub fn from_lat_lng(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }

    /// Gibt den Punkt als `[lat, lng]`-Paar zurück (persistiertes Format).
    pub fn to_lat_lng(self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    /// Liest ein `[lng, lat]`-Paar (GeoJSON-Reihenfolge).
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self::new(pair[1], pair[0])
    }

    /// Gibt den Punkt als `[lng, lat]`-Paar zurück (GeoJSON-Reihenfolge).
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Vektor-Sicht mit `x = Länge`, `y = Breite`.
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.longitude, self.latitude)
    }

    /// Gibt `true` zurück, wenn beide Komponenten im Koordinatenbereich liegen.
    pub fn is_valid(self) -> bool {
        super::validation::is_valid_latitude(Some(self.latitude))
            && super::validation::is_valid_longitude(Some(self.longitude))
    }
}

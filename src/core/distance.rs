//! Entfernungen auf der Kugel und Bounding-Box-Hilfen für das Map-Framing.

use super::fence_shape::FenceShape;
use super::geo_point::GeoPoint;

/// Erdradius in Metern (Kugelmodell).
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Großkreis-Entfernung nach Haversine in Metern.
///
/// `a = sin²(Δlat/2) + cos(latA)·cos(latB)·sin²(Δlng/2)`,
/// `c = 2·atan2(√a, √(1−a))`, Ergebnis `R·c`.
pub fn haversine_meters(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    let d_lat = (lat_b - lat_a).to_radians();
    let d_lng = (lng_b - lng_a).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat_a.to_radians().cos() * lat_b.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_METERS * c
}

/// Entfernung zwischen zwei Punkten in Metern.
pub fn distance_between(a: GeoPoint, b: GeoPoint) -> f64 {
    haversine_meters(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Kreisradius aus Mittelpunkt und Randpunkt (beim Aufziehen per Maus).
pub fn radius_from_points(center: GeoPoint, edge_point: GeoPoint) -> f64 {
    distance_between(center, edge_point)
}

/// Achsenparallele Grenzen in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Kleinster Breitengrad
    pub min_latitude: f64,
    /// Größter Breitengrad
    pub max_latitude: f64,
    /// Kleinster Längengrad
    pub min_longitude: f64,
    /// Größter Längengrad
    pub max_longitude: f64,
}

impl GeoBounds {
    /// Grenzen einer Punktmenge (`None` bei leerer Menge).
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self {
            min_latitude: first.latitude,
            max_latitude: first.latitude,
            min_longitude: first.longitude,
            max_longitude: first.longitude,
        };
        for p in rest {
            bounds.min_latitude = bounds.min_latitude.min(p.latitude);
            bounds.max_latitude = bounds.max_latitude.max(p.latitude);
            bounds.min_longitude = bounds.min_longitude.min(p.longitude);
            bounds.max_longitude = bounds.max_longitude.max(p.longitude);
        }
        Some(bounds)
    }

    /// Grenzen eines Kreises (Radius in Metern, Kugel-Näherung).
    pub fn around_circle(center: GeoPoint, radius_meters: f64) -> Self {
        let d_lat = (radius_meters / EARTH_RADIUS_METERS).to_degrees();
        // Zu den Polen hin wird der Längengrad-Abstand beliebig groß
        let cos_lat = center.latitude.to_radians().cos().max(1e-6);
        let d_lng = (radius_meters / (EARTH_RADIUS_METERS * cos_lat)).to_degrees();
        Self {
            min_latitude: (center.latitude - d_lat).max(-90.0),
            max_latitude: (center.latitude + d_lat).min(90.0),
            min_longitude: (center.longitude - d_lng).max(-180.0),
            max_longitude: (center.longitude + d_lng).min(180.0),
        }
    }

    /// Mittelpunkt der Extrema: `((max+min)/2, (max+min)/2)` je Achse.
    pub fn midpoint(&self) -> GeoPoint {
        GeoPoint::new(
            (self.max_latitude + self.min_latitude) / 2.0,
            (self.max_longitude + self.min_longitude) / 2.0,
        )
    }

    /// Südwest-Ecke.
    pub fn south_west(&self) -> GeoPoint {
        GeoPoint::new(self.min_latitude, self.min_longitude)
    }

    /// Nordost-Ecke.
    pub fn north_east(&self) -> GeoPoint {
        GeoPoint::new(self.max_latitude, self.max_longitude)
    }
}

/// "Zentrum" eines Polygons für die Kartenausrichtung.
///
/// Bounding-Box-Mittelpunkt, kein Flächenschwerpunkt.
pub fn centroid_of_vertices(vertices: &[GeoPoint]) -> Option<GeoPoint> {
    GeoBounds::from_points(vertices).map(|b| b.midpoint())
}

/// Zentrum einer Form: Kreismittelpunkt bzw. Bounding-Box-Mittelpunkt.
pub fn shape_center(shape: &FenceShape) -> Option<GeoPoint> {
    match shape {
        FenceShape::Polygon { vertices } => centroid_of_vertices(vertices),
        FenceShape::Circle { center, .. } => *center,
    }
}

/// Grenzen einer Form (Kreis ohne Radius: nur der Mittelpunkt).
pub fn shape_bounds(shape: &FenceShape) -> Option<GeoBounds> {
    match shape {
        FenceShape::Polygon { vertices } => GeoBounds::from_points(vertices),
        FenceShape::Circle {
            center,
            radius_meters,
        } => {
            let center = (*center)?;
            Some(match radius_meters {
                Some(r) if *r > 0.0 => GeoBounds::around_circle(center, *r),
                _ => GeoBounds::from_points(&[center])?,
            })
        }
    }
}

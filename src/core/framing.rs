//! Kartenausschnitt für "Auf Zaun zentrieren": Mittelpunkt + Zoomstufe.
//!
//! Projektion: Web-Mercator, normiert auf das Einheitsquadrat (x nach Osten,
//! y nach Süden). Bei Zoom `z` ist die Welt `tile_size · 2^z` Pixel breit.

use glam::DVec2;

use super::distance::{shape_bounds, shape_center, GeoBounds};
use super::fence_shape::FenceShape;
use super::geo_point::GeoPoint;
use crate::shared::EditorOptions;

/// Breitengrad-Grenze der Web-Mercator-Projektion.
pub const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_78;

/// Ziel-Ansicht für die Karte (Animation ist Sache des Hosts).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapFraming {
    /// Kartenmitte
    pub center: GeoPoint,
    /// Zoomstufe (ganzzahlig, im konfigurierten Bereich)
    pub zoom: f64,
}

/// Projiziert einen Punkt ins Web-Mercator-Einheitsquadrat.
pub fn project(point: GeoPoint) -> DVec2 {
    let v = point.as_dvec2();
    let lat = v.y.clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE).to_radians();
    let x = (v.x + 180.0) / 360.0;
    let y = 0.5
        - (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln() / (2.0 * std::f64::consts::PI);
    DVec2::new(x, y)
}

/// Umkehrung von [`project`].
pub fn unproject(v: DVec2) -> GeoPoint {
    let longitude = v.x * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * v.y);
    let latitude = n.sinh().atan().to_degrees();
    GeoPoint::new(latitude, longitude)
}

/// Größte ganzzahlige Zoomstufe, bei der `bounds` in den Viewport passt.
pub fn fit_zoom(bounds: &GeoBounds, viewport_px: [f64; 2], options: &EditorOptions) -> f64 {
    let sw = project(bounds.south_west());
    let ne = project(bounds.north_east());
    let span = (ne - sw).abs();

    let padding = DVec2::splat(options.framing_padding_px * 2.0);
    let available = (DVec2::from(viewport_px) - padding).max(DVec2::ONE);

    let zoom_for = |extent: f64, pixels: f64| {
        if extent <= f64::EPSILON {
            f64::INFINITY
        } else {
            (pixels / (options.tile_size_px * extent)).log2()
        }
    };

    let zoom = zoom_for(span.x, available.x).min(zoom_for(span.y, available.y));
    let zoom = if zoom.is_finite() {
        zoom.floor()
    } else {
        options.framing_max_zoom
    };
    zoom.clamp(options.framing_min_zoom, options.framing_max_zoom)
}

/// Berechnet den Ausschnitt für eine Form.
///
/// `None` wenn die Form keine Position hat (leeres Polygon, Kreis ohne Mittelpunkt).
pub fn frame_shape(
    shape: &FenceShape,
    viewport_px: [f64; 2],
    options: &EditorOptions,
) -> Option<MapFraming> {
    let center = shape_center(shape)?;
    let bounds = shape_bounds(shape)?;
    Some(MapFraming {
        center,
        zoom: fit_zoom(&bounds, viewport_px, options),
    })
}

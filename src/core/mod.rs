//! Core-Domänentypen: Punkte, Zaun-Formen, Validierung, Entfernungen, Framing.

pub mod distance;
pub mod fence_shape;
pub mod framing;
pub mod geo_point;
/// Persistiertes Wire-Format (`type`/`coordinates`/`center`/`radius`)
pub mod persisted;
pub mod validation;

pub use distance::{
    centroid_of_vertices, distance_between, haversine_meters, radius_from_points, shape_bounds,
    shape_center, GeoBounds, EARTH_RADIUS_METERS,
};
pub use fence_shape::{FenceKind, FenceShape, VertexField};
pub use framing::{frame_shape, MapFraming};
pub use geo_point::GeoPoint;
pub use persisted::PersistedFence;
pub use validation::{
    is_valid_latitude, is_valid_longitude, is_valid_radius, validate_shape, CoordinateField,
    FieldKind, ValidationFailure, MAX_RADIUS_METERS, MIN_POLYGON_VERTICES, MIN_RADIUS_METERS,
};

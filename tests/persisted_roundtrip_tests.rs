use approx::assert_relative_eq;
use geofence_editor::{FenceKind, FenceShape, GeoPoint, PersistedFence};

fn assert_same_shape(a: &FenceShape, b: &FenceShape) {
    assert_eq!(a.kind(), b.kind());
    assert_eq!(a.vertex_count(), b.vertex_count());
    for (va, vb) in a.vertices().iter().zip(b.vertices()) {
        assert_relative_eq!(va.latitude, vb.latitude, epsilon = 1e-12);
        assert_relative_eq!(va.longitude, vb.longitude, epsilon = 1e-12);
    }
    if let (
        FenceShape::Circle {
            center: ca,
            radius_meters: ra,
        },
        FenceShape::Circle {
            center: cb,
            radius_meters: rb,
        },
    ) = (a, b)
    {
        assert_eq!(ca, cb);
        assert_eq!(ra, rb);
    }
}

#[test]
fn test_polygon_survives_persisted_and_json_roundtrip() {
    let shape = FenceShape::polygon(
        (0..20)
            .map(|i| GeoPoint::new(-45.0 + i as f64 * 4.5, 170.0 - i as f64 * 17.0))
            .collect(),
    );

    let direct = FenceShape::from_persisted(&shape.to_persisted());
    assert_same_shape(&shape, &direct);

    let json = shape.to_persisted().to_json().expect("JSON erwartet");
    let parsed = PersistedFence::from_json(&json).expect("JSON lesbar");
    assert_same_shape(&shape, &FenceShape::from_persisted(&parsed));
}

#[test]
fn test_circle_survives_persisted_and_json_roundtrip() {
    let shape = FenceShape::circle(GeoPoint::new(-33.8688, 151.2093), 12_345.6);

    let json = shape.to_persisted().to_json().expect("JSON erwartet");
    let parsed = PersistedFence::from_json(&json).expect("JSON lesbar");
    let back = FenceShape::from_persisted(&parsed);

    assert_same_shape(&shape, &back);
    assert_eq!(back, shape);
}

#[test]
fn test_missing_keys_read_as_null() {
    let parsed = PersistedFence::from_json(r#"{"type":"circle","center":[1.5,2.5]}"#)
        .expect("JSON lesbar");
    assert_eq!(parsed.kind, FenceKind::Circle);
    assert!(parsed.coordinates.is_none());
    assert!(parsed.radius.is_none());

    let shape = FenceShape::from_persisted(&parsed);
    assert!(!shape.is_complete());
}

#[test]
fn test_unknown_type_is_an_error() {
    assert!(PersistedFence::from_json(r#"{"type":"rectangle"}"#).is_err());
}

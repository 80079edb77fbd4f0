use std::time::Duration;

use approx::assert_relative_eq;
use geofence_editor::app::tools::{DrawingMode, FenceInputTool};
use geofence_editor::core::CoordinateField;
use geofence_editor::{FenceIntent, FenceKind, GeoPoint};

use super::support::{north_of, triangle, Harness};

#[test]
fn test_polygon_drawing_notifies_once_on_finish() {
    let mut h = Harness::new();
    h.send(FenceIntent::StartDrawingRequested {
        kind: FenceKind::Polygon,
    });
    for p in triangle() {
        h.click(p);
    }
    assert_eq!(h.notification_count(), 0, "Polygon meldet erst beim Abschluss");

    h.finish();

    assert_eq!(h.notification_count(), 1);
    let payload = h
        .last_notification()
        .flatten()
        .expect("Polygon-Payload erwartet");
    assert_eq!(payload.kind, FenceKind::Polygon);
    assert_eq!(
        payload.coordinates,
        Some(vec![[29.25, 110.35], [29.26, 110.36], [29.27, 110.35]])
    );
    assert!(payload.center.is_none());
    assert!(payload.radius.is_none());
}

#[test]
fn test_drawing_update_reaches_coordinate_editor_exactly_once() {
    let mut h = Harness::new();
    h.send(FenceIntent::StartDrawingRequested {
        kind: FenceKind::Circle,
    });
    let center = GeoPoint::new(29.25, 110.35);
    h.click(center);

    // Genau eine Meldung, Koordinaten-Editor mit Generation 1 abgeglichen
    assert_eq!(h.notification_count(), 1);
    assert_eq!(h.state.coordinate_input.synced_generation(), 1);
    assert_eq!(h.state.sync.generation(), 1);
    assert!(!h.state.sync.is_in_flight());

    // Das Echo des Editors wurde verworfen, die Zeichnung nie zurück-abgeglichen
    assert_eq!(h.state.sync.suppressed_echoes(), 1);
    assert_eq!(h.state.drawing.synced_generation(), 0);
    assert_eq!(
        h.state.drawing.mode(),
        DrawingMode::DrawingCircleAdjustingRadius
    );

    let fields = h.state.coordinate_input.circle_fields();
    assert_eq!(fields.center_latitude, CoordinateField::Valid(29.25));
    assert_eq!(fields.center_longitude, CoordinateField::Valid(110.35));
    assert_eq!(fields.radius, CoordinateField::Valid(100.0));
}

#[test]
fn test_circle_radius_follows_cursor_through_controller() {
    let mut h = Harness::new();
    h.send(FenceIntent::StartDrawingRequested {
        kind: FenceKind::Circle,
    });
    let center = GeoPoint::new(29.25, 110.35);
    h.click(center);

    let payload = h.last_notification().flatten().expect("Kreis-Payload");
    assert_eq!(payload.center, Some([29.25, 110.35]));
    assert_eq!(payload.radius, Some(100.0));
    assert!(payload.coordinates.is_none());

    h.move_to(north_of(center, 750.0));

    assert_eq!(h.notification_count(), 2);
    let payload = h.last_notification().flatten().expect("Kreis-Payload");
    assert_relative_eq!(
        payload.radius.expect("Radius erwartet"),
        750.0,
        max_relative = 0.01
    );
    let radius_field = h
        .state
        .coordinate_input
        .circle_fields()
        .radius
        .valid_value()
        .expect("Radius-Feld gültig");
    assert_relative_eq!(radius_field, 750.0, max_relative = 0.01);
}

#[test]
fn test_physical_double_click_adds_at_most_one_vertex() {
    let mut h = Harness::new();
    h.send(FenceIntent::StartDrawingRequested {
        kind: FenceKind::Polygon,
    });
    for p in triangle() {
        h.click(p);
    }

    let fourth = GeoPoint::new(29.28, 110.34);
    let t = h.now;
    h.send(FenceIntent::MapClicked {
        position: fourth,
        at: t,
    });
    h.send(FenceIntent::MapClicked {
        position: fourth,
        at: t + Duration::from_millis(100),
    });
    h.send(FenceIntent::MapDoubleClicked {
        position: fourth,
        at: t + Duration::from_millis(101),
    });
    h.send(FenceIntent::TimerTick {
        now: t + Duration::from_secs(1),
    });

    let count = h
        .state
        .shape
        .as_ref()
        .map(|s| s.vertex_count())
        .expect("Form erwartet");
    assert!(count == 3 || count == 4, "count = {}", count);
    assert_eq!(h.notification_count(), 1);
}

#[test]
fn test_finish_with_too_few_vertices_sets_notice() {
    let mut h = Harness::new();
    h.send(FenceIntent::StartDrawingRequested {
        kind: FenceKind::Polygon,
    });
    h.click(GeoPoint::new(29.25, 110.35));
    h.finish();

    assert_eq!(h.notification_count(), 0);
    assert!(h.state.notice.is_some());
    assert!(h.state.shape.is_none());
}

#[test]
fn test_restart_drawing_discards_previous_shape() {
    let mut h = Harness::new();
    h.send(FenceIntent::StartDrawingRequested {
        kind: FenceKind::Polygon,
    });
    for p in triangle() {
        h.click(p);
    }
    h.finish();
    assert_eq!(h.notification_count(), 1);

    h.send(FenceIntent::StartDrawingRequested {
        kind: FenceKind::Polygon,
    });

    assert_eq!(h.notification_count(), 2);
    assert_eq!(h.last_notification(), Some(None));
    assert!(h.state.shape.is_none());
    assert_eq!(h.state.coordinate_input.valid_vertex_count(), 0);
}

#[test]
fn test_clear_without_shape_sends_nothing() {
    let mut h = Harness::new();
    h.send(FenceIntent::ClearDrawingRequested);
    assert_eq!(h.notification_count(), 0);
}

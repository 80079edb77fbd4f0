use geofence_editor::app::tools::{CircleField, FenceInputTool};
use geofence_editor::core::{is_valid_longitude, CoordinateField, VertexField};
use geofence_editor::{FenceIntent, FenceKind, InputSource};

use super::support::{pentagon_record, Harness};

fn coordinate_entry() -> Harness {
    let mut h = Harness::new();
    h.send(FenceIntent::InputModeChanged {
        mode: InputSource::CoordinateEntry,
    });
    h
}

fn edit(h: &mut Harness, index: usize, field: VertexField, raw: &str) {
    h.send(FenceIntent::VertexFieldEdited {
        index,
        field,
        raw: raw.to_string(),
    });
}

#[test]
fn test_complete_rows_notify_and_update_drawing() {
    let mut h = coordinate_entry();
    edit(&mut h, 0, VertexField::Latitude, "29.25");
    edit(&mut h, 0, VertexField::Longitude, "110.35");
    edit(&mut h, 1, VertexField::Latitude, "29.26");
    edit(&mut h, 1, VertexField::Longitude, "110.36");
    edit(&mut h, 2, VertexField::Latitude, "29.27");
    assert_eq!(h.notification_count(), 0);

    edit(&mut h, 2, VertexField::Longitude, "110.35");

    assert_eq!(h.notification_count(), 1);
    assert_eq!(h.state.drawing.pending_vertices().len(), 3);
    assert!(h.state.drawing.is_complete());
    assert_eq!(h.state.drawing.synced_generation(), 1);
    assert_eq!(h.state.coordinate_input.synced_generation(), 0);
}

#[test]
fn test_out_of_range_longitude_never_notifies() {
    let mut h = coordinate_entry();
    edit(&mut h, 1, VertexField::Latitude, "29.26");
    edit(&mut h, 1, VertexField::Longitude, "110.36");
    edit(&mut h, 2, VertexField::Latitude, "29.27");
    edit(&mut h, 2, VertexField::Longitude, "110.35");
    edit(&mut h, 0, VertexField::Latitude, "29.25");

    edit(&mut h, 0, VertexField::Longitude, "200");

    assert_eq!(
        h.state.coordinate_input.rows()[0].longitude,
        CoordinateField::Invalid(200.0)
    );
    assert!(!is_valid_longitude(Some(200.0)));
    assert_eq!(h.notification_count(), 0);
    assert!(h.state.shape.is_none());
}

#[test]
fn test_vertex_removal_from_loaded_polygon() {
    let mut h = Harness::new();
    h.send(FenceIntent::LoadFenceRequested {
        record: pentagon_record(),
    });
    h.send(FenceIntent::InputModeChanged {
        mode: InputSource::CoordinateEntry,
    });
    assert_eq!(h.notification_count(), 0, "Laden meldet nichts");
    assert_eq!(h.state.coordinate_input.rows().len(), 5);

    h.send(FenceIntent::RemoveVertexRequested { index: 4 });

    let payload = h.last_notification().flatten().expect("Polygon-Payload");
    assert_eq!(payload.coordinates.map(|c| c.len()), Some(4));
    assert_eq!(h.state.drawing.pending_vertices().len(), 4);

    h.send(FenceIntent::RemoveVertexRequested { index: 3 });
    h.send(FenceIntent::RemoveVertexRequested { index: 2 });

    let payload = h.last_notification().flatten().expect("Geleerte Payload");
    assert_eq!(payload.kind, FenceKind::Polygon);
    assert!(payload.coordinates.is_none());
    assert!(payload.center.is_none());
    assert!(payload.radius.is_none());
    assert_eq!(h.notification_count(), 3);
    assert!(h.state.drawing.pending_vertices().is_empty());
}

#[test]
fn test_no_polygon_below_three_valid_vertices_is_ever_reported() {
    let mut h = Harness::new();
    h.send(FenceIntent::LoadFenceRequested {
        record: pentagon_record(),
    });
    h.send(FenceIntent::InputModeChanged {
        mode: InputSource::CoordinateEntry,
    });
    for _ in 0..4 {
        h.send(FenceIntent::RemoveVertexRequested { index: 0 });
    }

    for payload in h.notifications.borrow().iter().flatten() {
        let count = payload.coordinates.as_ref().map_or(0, Vec::len);
        assert!(count == 0 || count >= 3, "Polygon mit {} Eckpunkten gemeldet", count);
    }
}

#[test]
fn test_add_vertex_is_capped() {
    let mut h = coordinate_entry();
    for _ in 0..30 {
        h.send(FenceIntent::AddVertexRequested);
    }
    assert_eq!(h.state.coordinate_input.rows().len(), 20);
    assert!(h.state.notice.is_some());
}

#[test]
fn test_circle_entry_syncs_drawing_without_feedback() {
    let mut h = coordinate_entry();
    h.send(FenceIntent::FenceKindChanged {
        kind: FenceKind::Circle,
    });
    for (field, raw) in [
        (CircleField::CenterLatitude, "29.25"),
        (CircleField::CenterLongitude, "110.35"),
        (CircleField::Radius, "500"),
    ] {
        h.send(FenceIntent::CircleFieldEdited {
            field,
            raw: raw.to_string(),
        });
    }

    assert_eq!(h.notification_count(), 1);
    let payload = h.last_notification().flatten().expect("Kreis-Payload");
    assert_eq!(payload.center, Some([29.25, 110.35]));
    assert_eq!(payload.radius, Some(500.0));
    assert_eq!(h.state.drawing.circle_radius(), Some(500.0));
    assert_eq!(h.state.sync.suppressed_echoes(), 0);
}

use geofence_editor::app::tools::DrawingMode;
use geofence_editor::{
    EditMode, FenceCommand, FenceIntent, FenceKind, GeoPoint, InputSource, PersistedFence,
    SaveOutcome, ValidationFailure,
};

use super::support::{pentagon_record, triangle, Harness};

#[test]
fn test_save_without_shape_is_rejected() {
    let mut h = Harness::new();

    let outcome = h.controller.save(&mut h.state).expect("kein Repository-Fehler");

    assert_eq!(outcome, SaveOutcome::Rejected(ValidationFailure::NoShape));
    assert_eq!(h.state.notice.as_deref(), Some("no shape drawn"));
    assert!(h.repository.is_empty());
}

#[test]
fn test_save_reports_first_invalid_vertex() {
    let mut h = Harness::new();
    let record = PersistedFence::from_json(
        r#"{"type":"polygon","coordinates":[[29.25,110.35],[95.0,110.36],[29.27,110.35]],"center":null,"radius":null}"#,
    )
    .expect("JSON gültig");
    h.send(FenceIntent::LoadFenceRequested { record });

    let outcome = h.controller.save(&mut h.state).expect("kein Repository-Fehler");

    let SaveOutcome::Rejected(failure) = outcome else {
        panic!("Ablehnung erwartet, erhalten: {:?}", outcome);
    };
    assert_eq!(failure, ValidationFailure::InvalidVertex { index: 2 });
    assert_eq!(failure.reason(), "vertex 2 has invalid coordinates");
}

#[test]
fn test_save_circle_with_small_radius_is_rejected() {
    let mut h = Harness::new();
    let record = PersistedFence::from_json(
        r#"{"type":"circle","coordinates":null,"center":[29.25,110.35],"radius":5}"#,
    )
    .expect("JSON gültig");
    h.send(FenceIntent::LoadFenceRequested { record });

    let outcome = h.controller.save(&mut h.state).expect("kein Repository-Fehler");
    assert_eq!(outcome, SaveOutcome::Rejected(ValidationFailure::InvalidRadius));
    assert_eq!(ValidationFailure::InvalidRadius.reason(), "invalid radius");
}

#[test]
fn test_save_drawn_polygon_hands_it_to_repository() {
    let mut h = Harness::new();
    h.send(FenceIntent::StartDrawingRequested {
        kind: FenceKind::Polygon,
    });
    for p in triangle() {
        h.click(p);
    }
    h.finish();

    let outcome = h.controller.save(&mut h.state).expect("kein Repository-Fehler");

    let SaveOutcome::Saved(record) = outcome else {
        panic!("Speichern erwartet, erhalten: {:?}", outcome);
    };
    assert_eq!(h.repository.latest(), Some(record.clone()));
    assert_eq!(
        record.to_json().expect("JSON"),
        r#"{"type":"polygon","coordinates":[[29.25,110.35],[29.26,110.36],[29.27,110.35]],"center":null,"radius":null}"#
    );
}

#[test]
fn test_load_marks_shape_complete_in_edit_mode() {
    let mut h = Harness::new();
    h.send(FenceIntent::LoadFenceRequested {
        record: pentagon_record(),
    });

    assert_eq!(h.state.edit_mode, EditMode::Edit);
    assert_eq!(h.state.kind, FenceKind::Polygon);
    assert!(h.state.drawing.is_complete());
    assert_eq!(h.state.drawing.mode(), DrawingMode::Idle);
    assert_eq!(h.state.drawing.pending_vertices().len(), 5);
    assert_eq!(h.state.coordinate_input.valid_vertex_count(), 5);
    assert_eq!(h.notification_count(), 0);
}

#[test]
fn test_load_two_vertex_polygon_still_counts_as_complete() {
    let mut h = Harness::new();
    let record = PersistedFence::from_json(
        r#"{"type":"polygon","coordinates":[[29.25,110.35],[29.26,110.36]]}"#,
    )
    .expect("JSON gültig");
    h.send(FenceIntent::LoadFenceRequested { record });

    assert!(h.state.drawing.is_complete());
    let outcome = h.controller.save(&mut h.state).expect("kein Repository-Fehler");
    assert_eq!(
        outcome,
        SaveOutcome::Rejected(ValidationFailure::TooFewVertices { count: 2 })
    );
}

#[test]
fn test_kind_change_discards_shape_in_both_modalities() {
    let mut h = Harness::new();
    h.send(FenceIntent::LoadFenceRequested {
        record: pentagon_record(),
    });

    h.send(FenceIntent::FenceKindChanged {
        kind: FenceKind::Circle,
    });

    assert!(h.state.shape.is_none());
    assert_eq!(h.last_notification(), Some(None));
    assert!(h.state.drawing.pending_vertices().is_empty());
    assert_eq!(h.state.coordinate_input.kind(), FenceKind::Circle);
    assert!(h.state.coordinate_input.circle_fields().center_latitude.is_empty());
}

#[test]
fn test_switching_input_mode_cancels_pending_click_but_keeps_shape() {
    let mut h = Harness::new();
    h.send(FenceIntent::StartDrawingRequested {
        kind: FenceKind::Polygon,
    });
    for p in triangle() {
        h.click(p);
    }
    h.finish();

    h.send(FenceIntent::StartDrawingRequested {
        kind: FenceKind::Polygon,
    });
    let at = h.now;
    h.send(FenceIntent::MapClicked {
        position: GeoPoint::new(29.3, 110.3),
        at,
    });
    assert!(h.state.drawing.has_pending_click());

    h.send(FenceIntent::InputModeChanged {
        mode: InputSource::CoordinateEntry,
    });

    assert!(!h.state.drawing.has_pending_click());
    assert_eq!(h.state.input_mode, InputSource::CoordinateEntry);
    let at = h.now + std::time::Duration::from_secs(1);
    h.send(FenceIntent::TimerTick { now: at });
    assert!(h.state.drawing.pending_vertices().is_empty());
}

#[test]
fn test_close_resets_session_and_logs_commands() {
    let mut h = Harness::new();
    h.send(FenceIntent::LoadFenceRequested {
        record: pentagon_record(),
    });

    h.send(FenceIntent::CloseRequested);

    assert!(h.state.shape.is_none());
    assert_eq!(h.state.edit_mode, EditMode::Create);
    assert_eq!(h.state.coordinate_input.rows().len(), 3);
    assert!(!h.state.drawing.is_complete());
    assert!(matches!(
        h.state.command_log.entries().last(),
        Some(FenceCommand::ResetSession)
    ));
}

#[test]
fn test_center_on_loaded_circle() {
    let mut h = Harness::new();
    let record = PersistedFence::from_json(
        r#"{"type":"circle","coordinates":null,"center":[29.25,110.35],"radius":1000}"#,
    )
    .expect("JSON gültig");
    h.send(FenceIntent::LoadFenceRequested { record });
    h.send(FenceIntent::ViewportResized {
        size: [1024.0, 768.0],
    });
    h.send(FenceIntent::CenterOnShapeRequested);

    let framing = h.state.view.framing.expect("Ausschnitt erwartet");
    assert_eq!(framing.center, GeoPoint::new(29.25, 110.35));
    assert!(framing.zoom >= h.state.options.framing_min_zoom);
    assert!(framing.zoom <= h.state.options.framing_max_zoom);
}

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use geofence_editor::{
    FenceEditController, FenceEditState, FenceIntent, GeoPoint, InMemoryFenceRepository,
    PersistedFence,
};

/// Abstand zwischen zwei Klicks, größer als das Doppelklick-Fenster.
pub const STEP: Duration = Duration::from_millis(400);

/// Controller, State und aufgezeichnete Shape-Changed-Meldungen.
pub struct Harness {
    pub controller: FenceEditController,
    pub state: FenceEditState,
    pub notifications: Rc<RefCell<Vec<Option<PersistedFence>>>>,
    pub repository: InMemoryFenceRepository,
    pub now: Instant,
}

impl Harness {
    pub fn new() -> Self {
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&notifications);
        let repository = InMemoryFenceRepository::new();
        let controller = FenceEditController::new(
            move |payload: Option<&PersistedFence>| recorder.borrow_mut().push(payload.cloned()),
            repository.clone(),
        );
        Self {
            controller,
            state: FenceEditState::new(),
            notifications,
            repository,
            now: Instant::now(),
        }
    }

    pub fn send(&mut self, intent: FenceIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    /// Einfach-Klick, danach Tick nach Ablauf des Doppelklick-Fensters.
    pub fn click(&mut self, position: GeoPoint) {
        let at = self.now;
        self.send(FenceIntent::MapClicked { position, at });
        self.now += STEP;
        let now = self.now;
        self.send(FenceIntent::TimerTick { now });
    }

    pub fn move_to(&mut self, position: GeoPoint) {
        self.now += Duration::from_millis(16);
        let at = self.now;
        self.send(FenceIntent::MapPointerMoved { position, at });
    }

    pub fn finish(&mut self) {
        let at = self.now;
        self.send(FenceIntent::FinishDrawingRequested { at });
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.borrow().len()
    }

    pub fn last_notification(&self) -> Option<Option<PersistedFence>> {
        self.notifications.borrow().last().cloned()
    }
}

pub fn triangle() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(29.25, 110.35),
        GeoPoint::new(29.26, 110.36),
        GeoPoint::new(29.27, 110.35),
    ]
}

pub fn pentagon_record() -> PersistedFence {
    PersistedFence::from_json(
        r#"{"type":"polygon","coordinates":[[29.25,110.35],[29.26,110.36],[29.27,110.35],[29.26,110.33],[29.255,110.34]],"center":null,"radius":null}"#,
    )
    .expect("JSON gültig")
}

/// Punkt `meters` genau nördlich von `center`.
pub fn north_of(center: GeoPoint, meters: f64) -> GeoPoint {
    let dlat = (meters / geofence_editor::core::EARTH_RADIUS_METERS).to_degrees();
    GeoPoint::new(center.latitude + dlat, center.longitude)
}

//! Lifecycle-Methoden der Zeichen-Sitzung: Kommandos, Zeiger-Events,
//! FenceInputTool-Implementierung.

use std::time::Instant;

use super::super::{FenceInputTool, InputSource, ShapeUpdate};
use super::state::{DrawingAction, DrawingMode, DrawingSession};
use crate::core::{radius_from_points, FenceShape, GeoPoint, MIN_POLYGON_VERTICES};

impl DrawingSession {
    // ── Kommandos ───────────────────────────────────────────────

    /// Beginnt ein neues Polygon. Eine vorhandene Form wird verworfen.
    pub fn start_polygon(&mut self) -> DrawingAction {
        self.start(DrawingMode::DrawingPolygon)
    }

    /// Beginnt einen neuen Kreis. Eine vorhandene Form wird verworfen.
    pub fn start_circle(&mut self) -> DrawingAction {
        self.start(DrawingMode::DrawingCircleSettingCenter)
    }

    fn start(&mut self, mode: DrawingMode) -> DrawingAction {
        let had_data = self.has_data();
        self.discard_data();
        self.mode = mode;
        log::debug!("Zeichnen gestartet: {:?}", mode);
        if had_data {
            DrawingAction::ShapeChanged(ShapeUpdate::Removed)
        } else {
            DrawingAction::Continue
        }
    }

    /// Schließt die Zeichnung ab ("Fertig"-Button).
    ///
    /// Ein noch nicht abgelaufener Klick wird storniert, ein abgelaufener
    /// zuvor noch übernommen.
    pub fn finish(&mut self, at: Instant) -> DrawingAction {
        self.flush_expired_click(at);
        self.clicks.cancel();
        match self.mode {
            DrawingMode::DrawingPolygon => self.finish_polygon(),
            DrawingMode::DrawingCircleAdjustingRadius => self.finish_circle(),
            DrawingMode::DrawingCircleSettingCenter | DrawingMode::Idle => DrawingAction::Ignored,
        }
    }

    /// Entfernt den zuletzt gesetzten Eckpunkt (nur Polygon).
    pub fn undo_vertex(&mut self, at: Instant) -> DrawingAction {
        if self.mode != DrawingMode::DrawingPolygon {
            return DrawingAction::Ignored;
        }
        self.flush_expired_click(at);
        // Ein noch ausstehender Klick ist aus Sicht des Users der letzte Eckpunkt
        let removed = self.clicks.cancel() || self.pending_vertices.pop().is_some();
        if !removed {
            return DrawingAction::Ignored;
        }
        if self.pending_vertices.is_empty() {
            self.preview_cursor = None;
        }
        DrawingAction::Continue
    }

    /// Verwirft die Zeichnung und kehrt nach `Idle` zurück.
    ///
    /// Nur wenn Daten vorhanden waren, wird eine verworfene Form gemeldet.
    pub fn clear(&mut self) -> DrawingAction {
        let had_data = self.has_data();
        self.discard_data();
        self.mode = DrawingMode::Idle;
        if had_data {
            log::debug!("Zeichnung verworfen");
            DrawingAction::ShapeChanged(ShapeUpdate::Removed)
        } else {
            DrawingAction::Ignored
        }
    }

    // ── Zeiger-Events ───────────────────────────────────────────

    /// Einfach-Klick auf der Karte.
    pub fn on_click(&mut self, pos: GeoPoint, at: Instant) -> DrawingAction {
        self.flush_expired_click(at);
        match self.mode {
            DrawingMode::Idle => DrawingAction::Ignored,
            DrawingMode::DrawingPolygon => {
                if self.clicks.is_within_window(at) {
                    // Zweiter Klick eines Doppelklicks: erster Klick wird nicht wirksam
                    self.clicks.cancel();
                    return self.finish_polygon();
                }
                if !self.can_add_vertex() {
                    log::warn!(
                        "Eckpunkt-Limit ({}) erreicht, Klick ignoriert",
                        self.max_vertices
                    );
                    return DrawingAction::CapReached;
                }
                self.clicks.schedule(pos, at);
                DrawingAction::Continue
            }
            DrawingMode::DrawingCircleSettingCenter => self.place_circle_center(pos),
            DrawingMode::DrawingCircleAdjustingRadius => self.finish_circle(),
        }
    }

    /// Zeigerbewegung über der Karte.
    pub fn on_move(&mut self, pos: GeoPoint, at: Instant) -> DrawingAction {
        self.flush_expired_click(at);
        match self.mode {
            DrawingMode::DrawingPolygon if !self.pending_vertices.is_empty() => {
                self.preview_cursor = Some(pos);
                DrawingAction::Continue
            }
            DrawingMode::DrawingCircleAdjustingRadius => {
                let Some(center) = self.circle_center else {
                    return DrawingAction::Ignored;
                };
                self.circle_radius = Some(radius_from_points(center, pos));
                self.preview_cursor = Some(pos);
                DrawingAction::ShapeChanged(ShapeUpdate::Replaced(FenceShape::Circle {
                    center: Some(center),
                    radius_meters: self.circle_radius,
                }))
            }
            _ => DrawingAction::Ignored,
        }
    }

    /// Doppelklick auf der Karte.
    pub fn on_double_click(&mut self, pos: GeoPoint, at: Instant) -> DrawingAction {
        match self.mode {
            DrawingMode::Idle => {
                self.clicks.cancel();
                DrawingAction::Ignored
            }
            DrawingMode::DrawingPolygon => {
                // Abgelaufener Klick zählt, ein Klick im Fenster gehört zum Doppelklick
                self.flush_expired_click(at);
                self.clicks.cancel();
                self.finish_polygon()
            }
            DrawingMode::DrawingCircleSettingCenter => self.place_circle_center(pos),
            DrawingMode::DrawingCircleAdjustingRadius => self.finish_circle(),
        }
    }

    /// Markiert eine geladene Form als abgeschlossen.
    ///
    /// Gespeicherte Zäune gelten als bereits geprüft, es gibt keine
    /// Mindest-Eckpunkt-Prüfung.
    pub fn mark_complete(&mut self) {
        self.is_complete = self.has_data();
    }

    /// Timer-Tick des Hosts: übernimmt einen abgelaufenen Einfach-Klick.
    pub fn tick(&mut self, now: Instant) -> DrawingAction {
        let Some(pos) = self.clicks.take_expired(now) else {
            return DrawingAction::Ignored;
        };
        self.commit_vertex(pos)
    }

    // ── Interne Übergänge ───────────────────────────────────────

    fn flush_expired_click(&mut self, now: Instant) {
        if let Some(pos) = self.clicks.take_expired(now) {
            self.commit_vertex(pos);
        }
    }

    fn commit_vertex(&mut self, pos: GeoPoint) -> DrawingAction {
        if self.mode != DrawingMode::DrawingPolygon {
            return DrawingAction::Ignored;
        }
        if !self.can_add_vertex() {
            log::warn!("Eckpunkt-Limit ({}) erreicht, Klick ignoriert", self.max_vertices);
            return DrawingAction::CapReached;
        }
        self.pending_vertices.push(pos);
        log::debug!("Eckpunkt {} gesetzt", self.pending_vertices.len());
        DrawingAction::Continue
    }

    fn finish_polygon(&mut self) -> DrawingAction {
        let count = self.pending_vertices.len();
        if count < MIN_POLYGON_VERTICES {
            log::debug!("Polygon mit {} Eckpunkten kann nicht abgeschlossen werden", count);
            return DrawingAction::NeedMoreVertices { count };
        }
        self.mode = DrawingMode::Idle;
        self.is_complete = true;
        self.preview_cursor = None;
        log::debug!("Polygon mit {} Eckpunkten abgeschlossen", count);
        DrawingAction::Finished(self.polygon_shape())
    }

    fn place_circle_center(&mut self, pos: GeoPoint) -> DrawingAction {
        self.circle_center = Some(pos);
        self.circle_radius = Some(self.default_radius_m);
        self.is_complete = true;
        self.mode = DrawingMode::DrawingCircleAdjustingRadius;
        DrawingAction::ShapeChanged(ShapeUpdate::Replaced(FenceShape::circle(
            pos,
            self.default_radius_m,
        )))
    }

    fn finish_circle(&mut self) -> DrawingAction {
        let Some(shape) = self.circle_shape() else {
            return DrawingAction::Ignored;
        };
        self.mode = DrawingMode::Idle;
        self.preview_cursor = None;
        log::debug!("Kreis abgeschlossen: {:?}", self.circle_radius);
        DrawingAction::Finished(shape)
    }
}

impl FenceInputTool for DrawingSession {
    fn source(&self) -> InputSource {
        InputSource::MapDrawing
    }

    fn sync_from_shape(
        &mut self,
        shape: Option<&FenceShape>,
        generation: u64,
    ) -> Option<ShapeUpdate> {
        self.discard_data();
        self.mode = DrawingMode::Idle;
        match shape {
            Some(FenceShape::Polygon { vertices }) => {
                self.pending_vertices = vertices.clone();
            }
            Some(FenceShape::Circle {
                center,
                radius_meters,
            }) => {
                self.circle_center = *center;
                self.circle_radius = *radius_meters;
            }
            None => {}
        }
        self.is_complete = shape.is_some_and(FenceShape::is_complete);
        self.synced_generation = generation;
        // Die Karte leitet keine eigene Form aus dem Abgleich ab
        None
    }

    fn synced_generation(&self) -> u64 {
        self.synced_generation
    }

    fn cancel_pending(&mut self) {
        if self.clicks.cancel() {
            log::debug!("Ausstehender Klick verworfen");
        }
        self.preview_cursor = None;
    }

    fn has_pending_input(&self) -> bool {
        self.mode.is_drawing() || self.clicks.is_pending()
    }

    fn reset(&mut self) {
        self.discard_data();
        self.mode = DrawingMode::Idle;
        self.synced_generation = 0;
    }

    fn status_text(&self) -> &str {
        match self.mode {
            DrawingMode::Idle if self.is_complete => "Zaun gezeichnet",
            DrawingMode::Idle => "Polygon oder Kreis zum Zeichnen wählen",
            DrawingMode::DrawingPolygon if self.pending_vertices.len() < MIN_POLYGON_VERTICES => {
                "Eckpunkte klicken (mindestens 3)"
            }
            DrawingMode::DrawingPolygon if !self.can_add_vertex() => {
                "Eckpunkt-Limit erreicht, Doppelklick zum Abschließen"
            }
            DrawingMode::DrawingPolygon => "Weitere Eckpunkte klicken, Doppelklick zum Abschließen",
            DrawingMode::DrawingCircleSettingCenter => "Mittelpunkt klicken",
            DrawingMode::DrawingCircleAdjustingRadius => {
                "Radius mit der Maus aufziehen, Klick zum Übernehmen"
            }
        }
    }
}

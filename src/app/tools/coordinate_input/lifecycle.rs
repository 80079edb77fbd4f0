//! Feld-Eingaben, Zeilen-Verwaltung und FenceInputTool-Implementierung
//! des Koordinaten-Editors.

use super::super::{FenceInputTool, InputSource, ShapeUpdate};
use super::state::{CircleField, CircleFields, CoordinateInputEditor, EditorAction, VertexFields};
use crate::core::{
    CoordinateField, FenceKind, FenceShape, FieldKind, VertexField, MIN_POLYGON_VERTICES,
};

impl CoordinateInputEditor {
    /// Wechselt den Zaun-Typ. Die Daten des anderen Typs werden verworfen.
    pub fn set_kind(&mut self, kind: FenceKind) -> EditorAction {
        if self.kind == kind {
            return EditorAction::Ignored;
        }
        self.clear_fields(kind);
        log::debug!("Koordinaten-Editor auf {:?} umgestellt", kind);
        EditorAction::Continue
    }

    /// Übernimmt die Roh-Eingabe eines Eckpunkt-Feldes.
    ///
    /// Nur ein gültiger Wert kann die Form ändern, und auch das erst, wenn
    /// danach alle Zeilen gültig sind.
    pub fn set_vertex_field(
        &mut self,
        index: usize,
        field: VertexField,
        raw: &str,
    ) -> EditorAction {
        if self.kind != FenceKind::Polygon {
            return EditorAction::Ignored;
        }
        let Some(row) = self.rows.get_mut(index) else {
            return EditorAction::Ignored;
        };
        let kind = match field {
            VertexField::Latitude => FieldKind::Latitude,
            VertexField::Longitude => FieldKind::Longitude,
        };
        let parsed = kind.parse(raw);
        *row.field_mut(field) = parsed;

        if !parsed.is_valid() {
            log::debug!("Eckpunkt {} {:?}: {:?}", index + 1, field, parsed);
            return EditorAction::Continue;
        }
        self.emit_if_complete()
    }

    /// Übernimmt die Roh-Eingabe eines Kreis-Feldes.
    pub fn set_circle_field(&mut self, field: CircleField, raw: &str) -> EditorAction {
        if self.kind != FenceKind::Circle {
            return EditorAction::Ignored;
        }
        let parsed = field.kind().parse(raw);
        *self.circle.field_mut(field) = parsed;

        if !parsed.is_valid() {
            log::debug!("Kreis-Feld {:?}: {:?}", field, parsed);
            return EditorAction::Continue;
        }
        self.emit_if_complete()
    }

    /// Hängt eine leere Zeile an.
    pub fn add_vertex(&mut self) -> EditorAction {
        if self.kind != FenceKind::Polygon {
            return EditorAction::Ignored;
        }
        if !self.can_add_vertex() {
            log::warn!("Eckpunkt-Limit ({}) erreicht", self.max_vertices);
            return EditorAction::CapReached;
        }
        self.rows.push(VertexFields::default());
        EditorAction::Continue
    }

    /// Entfernt die Zeile `index`.
    ///
    /// Fallen danach weniger als drei gültige Eckpunkte an, wird die Form
    /// geleert (Payload mit `coordinates: null`).
    pub fn remove_vertex(&mut self, index: usize) -> EditorAction {
        if self.kind != FenceKind::Polygon || index >= self.rows.len() {
            return EditorAction::Ignored;
        }
        self.rows.remove(index);

        if self.valid_vertex_count() < MIN_POLYGON_VERTICES {
            log::debug!(
                "Nur noch {} gültige Eckpunkte, Form wird geleert",
                self.valid_vertex_count()
            );
            return EditorAction::ShapeChanged(ShapeUpdate::Cleared(FenceKind::Polygon));
        }
        self.emit_if_complete()
    }

    fn emit_if_complete(&self) -> EditorAction {
        match self.current_shape() {
            Some(shape) => EditorAction::ShapeChanged(ShapeUpdate::Replaced(shape)),
            None => EditorAction::Continue,
        }
    }
}

impl FenceInputTool for CoordinateInputEditor {
    fn source(&self) -> InputSource {
        InputSource::CoordinateEntry
    }

    fn sync_from_shape(
        &mut self,
        shape: Option<&FenceShape>,
        generation: u64,
    ) -> Option<ShapeUpdate> {
        match shape {
            Some(FenceShape::Polygon { vertices }) if !vertices.is_empty() => {
                self.kind = FenceKind::Polygon;
                self.rows = vertices.iter().copied().map(VertexFields::from_point).collect();
                self.circle = CircleFields::default();
            }
            Some(FenceShape::Circle {
                center,
                radius_meters,
            }) => {
                self.kind = FenceKind::Circle;
                self.rows = Vec::new();
                self.circle = CircleFields::from_circle(*center, *radius_meters);
            }
            Some(empty) => self.clear_fields(empty.kind()),
            None => self.clear_fields(self.kind),
        }
        self.synced_generation = generation;

        // Die neuen Felder beschreiben eine vollständige Form: das ist das Echo
        // des Abgleichs, der Controller verwirft es
        self.current_shape().map(ShapeUpdate::Replaced)
    }

    fn synced_generation(&self) -> u64 {
        self.synced_generation
    }

    fn reset(&mut self) {
        self.clear_fields(FenceKind::Polygon);
        self.synced_generation = 0;
    }

    fn status_text(&self) -> &str {
        match self.kind {
            FenceKind::Polygon if !self.invalid_rows().is_empty() => {
                "Ungültige Koordinaten korrigieren"
            }
            FenceKind::Polygon if self.current_shape().is_some() => "Koordinaten vollständig",
            FenceKind::Polygon => "Mindestens 3 Eckpunkte eingeben",
            FenceKind::Circle if matches!(self.circle.radius, CoordinateField::Invalid(_)) => {
                "Radius muss zwischen 10 und 100000 m liegen"
            }
            FenceKind::Circle if self.circle.shape().is_some() => "Kreis vollständig",
            FenceKind::Circle => "Mittelpunkt und Radius eingeben",
        }
    }
}

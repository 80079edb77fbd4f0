//! Generationszähler gegen Rückkopplung zwischen den Eingabe-Modalitäten.
//!
//! Wird eine Änderung übernommen, öffnet der Guard eine neue Generation.
//! Solange sie läuft, gilt jede weitere gemeldete Änderung als Echo des
//! eigenen Abgleichs und wird verworfen.

/// Zustand des Abgleichs.
#[derive(Debug, Clone, Default)]
pub struct SyncGuard {
    generation: u64,
    in_flight: Option<u64>,
    suppressed: u64,
}

impl SyncGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Öffnet eine neue Generation.
    ///
    /// `None`, wenn bereits ein Abgleich läuft; die auslösende Änderung ist
    /// dann ein Echo und wird gezählt.
    pub fn begin(&mut self) -> Option<u64> {
        if let Some(current) = self.in_flight {
            self.suppressed += 1;
            log::trace!("Echo während Generation {} verworfen", current);
            return None;
        }
        self.generation += 1;
        self.in_flight = Some(self.generation);
        Some(self.generation)
    }

    /// Schließt die Generation `generation`.
    pub fn finish(&mut self, generation: u64) {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
        } else {
            log::warn!(
                "Sync-Generation {} beendet, offen war {:?}",
                generation,
                self.in_flight
            );
        }
    }

    /// Läuft gerade ein Abgleich?
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Zuletzt vergebene Generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Anzahl der bisher verworfenen Echos.
    pub fn suppressed_echoes(&self) -> u64 {
        self.suppressed
    }
}

//! Entprellung von Einfach- gegen Doppelklick.
//!
//! Ein Karten-Widget meldet für einen physischen Doppelklick zwei Klicks und
//! einen Doppelklick. Der Seiteneffekt des ersten Klicks wird deshalb erst
//! nach Ablauf des Zeitfensters ausgeführt und kann bis dahin storniert werden.
//! Zeitpunkte werden vom Host übergeben, es läuft kein eigener Timer.

use std::time::{Duration, Instant};

use crate::core::GeoPoint;

/// Vorgemerkter Einfach-Klick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingClick {
    /// Klickposition
    pub position: GeoPoint,
    /// Ab diesem Zeitpunkt gilt der Klick als Einfach-Klick
    pub deadline: Instant,
}

/// Timer-Handle für genau einen ausstehenden Klick.
#[derive(Debug, Clone)]
pub struct ClickDebounce {
    window: Duration,
    pending: Option<PendingClick>,
}

impl ClickDebounce {
    /// Erstellt eine Entprellung mit dem gegebenen Doppelklick-Fenster.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Setzt ein neues Zeitfenster (laufende Klicks behalten ihre Deadline).
    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
    }

    /// Merkt einen Klick vor. Ein noch ausstehender Klick wird ersetzt.
    pub fn schedule(&mut self, position: GeoPoint, at: Instant) {
        self.pending = Some(PendingClick {
            position,
            deadline: at + self.window,
        });
    }

    /// Liefert den vorgemerkten Klick, falls sein Fenster bei `now` abgelaufen ist.
    pub fn take_expired(&mut self, now: Instant) -> Option<GeoPoint> {
        match self.pending {
            Some(click) if click.deadline <= now => {
                self.pending = None;
                Some(click.position)
            }
            _ => None,
        }
    }

    /// Liegt `at` innerhalb des Fensters eines vorgemerkten Klicks?
    pub fn is_within_window(&self, at: Instant) -> bool {
        self.pending.is_some_and(|click| at < click.deadline)
    }

    /// Storniert den vorgemerkten Klick. Gibt `true` zurück wenn einer ausstand.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Steht ein Klick aus?
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Der vorgemerkte Klick (für Vorschau/Diagnose).
    pub fn pending(&self) -> Option<&PendingClick> {
        self.pending.as_ref()
    }
}

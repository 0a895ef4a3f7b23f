//! Cancellable one-shot deadlines.
//!
//! Components own their `Deadline`s. Nothing runs in the background: the
//! owner polls `take_expired` from its tick, so a dropped or cancelled
//! deadline can never fire after its component is gone.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the deadline `delay` after `now`. Re-arming replaces any
    /// pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.at = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.at = None;
    }

    pub fn is_pending(&self) -> bool {
        self.at.is_some()
    }

    /// Returns true exactly once when the deadline has passed, disarming it.
    pub fn take_expired(&mut self, now: Instant) -> bool {
        match self.at {
            Some(at) if now >= at => {
                self.at = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the deadline fires, if armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.at.map(|at| at.saturating_duration_since(now))
    }
}

//! Coalesces bursts of signals (drag-resizes) into a single deferred firing.

use instant::Instant;
use std::time::Duration;

/// Polled debouncer. Every `signal` pushes the deadline out by the quiet
/// period; `fire_ready` reports a deadline that has passed exactly once.
/// Time is injected so tests don't sleep.
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record a signal at `now`, restarting the quiet period.
    pub fn signal(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True when the quiet period has elapsed; clears the pending deadline.
    pub fn fire_ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}

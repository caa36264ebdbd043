// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss deadline tracking.
//!
//! The banner drives this from periodic `Tick` events; the clock is passed
//! in as data so firing decisions stay deterministic under test.

use std::time::{Duration, Instant};

/// Cancelable auto-dismiss deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayTimer {
    deadline: Option<Instant>,
}

impl DisplayTimer {
    /// Arms the timer to fire `duration` after `now`, replacing any
    /// previously armed deadline.
    pub fn schedule(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    /// Disarms the timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns whether a deadline is armed.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes the deadline and returns `true` once `now` has reached it.
    ///
    /// Fires at most once per `schedule`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscheduled_timer_never_fires() {
        let mut timer = DisplayTimer::default();
        assert!(!timer.is_scheduled());
        assert!(!timer.fire_if_due(Instant::now()));
    }

    #[test]
    fn fires_once_the_deadline_passes() {
        let start = Instant::now();
        let mut timer = DisplayTimer::default();
        timer.schedule(start, Duration::from_secs(3));

        assert!(!timer.fire_if_due(start + Duration::from_secs(2)));
        assert!(timer.fire_if_due(start + Duration::from_secs(3)));
    }

    #[test]
    fn fires_at_most_once_per_schedule() {
        let start = Instant::now();
        let mut timer = DisplayTimer::default();
        timer.schedule(start, Duration::from_secs(1));

        assert!(timer.fire_if_due(start + Duration::from_secs(2)));
        assert!(!timer.fire_if_due(start + Duration::from_secs(5)));
        assert!(!timer.is_scheduled());
    }

    #[test]
    fn cancel_disarms_the_deadline() {
        let start = Instant::now();
        let mut timer = DisplayTimer::default();
        timer.schedule(start, Duration::from_secs(1));
        timer.cancel();

        assert!(!timer.is_scheduled());
        assert!(!timer.fire_if_due(start + Duration::from_secs(10)));
    }

    #[test]
    fn reschedule_replaces_the_deadline() {
        let start = Instant::now();
        let mut timer = DisplayTimer::default();
        timer.schedule(start, Duration::from_secs(1));
        timer.schedule(start, Duration::from_secs(10));

        assert!(!timer.fire_if_due(start + Duration::from_secs(5)));
        assert!(timer.fire_if_due(start + Duration::from_secs(10)));
    }
}

//! Trailing debounce on top of one-shot timers.
//!
//! Every [`Debouncer::trigger`] cancels the pending timer and starts a new one,
//! so the action fires once, `delay` after the last trigger in a burst.

use std::time::{Duration, Instant};

use crate::logging::targets;
use crate::timer::{TimerId, TimerManager};

/// A cancellable trailing debounce.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    timers: TimerManager,
    pending: Option<TimerId>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timers: TimerManager::new(),
            pending: None,
        }
    }

    /// The quiet period.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register an event at `now`, resetting the quiet period.
    pub fn trigger(&mut self, now: Instant) {
        if let Some(id) = self.pending.take() {
            // Already fired or stopped timers are fine to ignore here.
            let _ = self.timers.stop(id);
        }
        self.pending = Some(self.timers.start_one_shot(now, self.delay));
        tracing::trace!(target: targets::DEBOUNCE, delay = ?self.delay, "debounce rescheduled");
    }

    /// Drop the pending action, if any.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.timers.clear();
            tracing::trace!(target: targets::DEBOUNCE, "debounce cancelled");
        }
    }

    /// Whether an action is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some_and(|id| self.timers.is_active(id))
    }

    /// Time from `now` until the pending action fires.
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        let id = self.pending?;
        self.timers
            .next_fire(id)
            .map(|at| at.saturating_duration_since(now))
    }

    /// Advance to `now`.
    ///
    /// Returns `true` exactly once per burst, when the quiet period following
    /// the last trigger has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(id) = self.pending else {
            return false;
        };
        let fired = self.timers.process_expired(now).contains(&id);
        if fired {
            self.pending = None;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_collapses_to_single_fire() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(100));

        for step in 0..5 {
            debouncer.trigger(start + ms(step * 20));
            assert!(!debouncer.poll(start + ms(step * 20 + 10)));
        }

        // Last trigger at 80ms, so nothing before 180ms.
        assert!(!debouncer.poll(start + ms(179)));
        assert!(debouncer.poll(start + ms(180)));
        assert!(!debouncer.poll(start + ms(1000)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancel_discards_pending_action() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(100));

        debouncer.trigger(start);
        assert!(debouncer.is_pending());
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(start + ms(500)));
    }

    #[test]
    fn reports_remaining_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(100));

        assert_eq!(debouncer.time_until_fire(start), None);
        debouncer.trigger(start);
        assert_eq!(debouncer.time_until_fire(start + ms(30)), Some(ms(70)));
    }

    #[test]
    fn can_fire_again_after_new_trigger() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(100));

        debouncer.trigger(start);
        assert!(debouncer.poll(start + ms(100)));
        debouncer.trigger(start + ms(150));
        assert!(debouncer.poll(start + ms(250)));
    }
}

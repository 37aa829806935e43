//! One-shot timers for Text Ticker.
//!
//! The manager never reads the clock itself: every operation takes the
//! current `Instant`, so the host decides what "now" is and tests can step
//! time deterministically.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, TimerError};
use crate::logging::targets::TIMER;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages one-shot timers against a host-supplied clock.
#[derive(Debug)]
pub struct TimerManager {
    /// Fire time of every pending timer.
    timers: SlotMap<TimerId, Instant>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    ///
    /// Entries for stopped timers are left in place and skipped lazily when
    /// they reach the front.
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires `duration` after `now`.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, now: Instant, duration: Duration) -> TimerId {
        let fire_time = now + duration;
        let id = self.timers.insert(fire_time);
        self.queue.push(TimerQueueEntry { id, fire_time });
        tracing::trace!(target: TIMER, ?id, ?duration, "timer started");
        id
    }

    /// Stop and remove a timer.
    ///
    /// Returns `Ok(())` if the timer was found and removed, or an error if not found.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if self.timers.remove(id).is_some() {
            tracing::trace!(target: TIMER, ?id, "timer stopped");
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Stop every timer.
    pub fn clear(&mut self) {
        self.timers.clear();
        self.queue.clear();
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Get the instant at which a timer will fire.
    pub fn next_fire(&self, id: TimerId) -> Option<Instant> {
        self.timers.get(id).copied()
    }

    /// Process all timers due at or before `now`.
    ///
    /// Returns the IDs of the timers that fired, in fire-time order. Fired
    /// timers are removed.
    #[tracing::instrument(skip(self), target = TIMER, level = "trace")]
    pub fn process_expired(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            // Stopped timers leave their queue entry behind.
            if self.timers.remove(entry.id).is_some() {
                tracing::trace!(target: TIMER, id = ?entry.id, "timer fired");
                fired.push(entry.id);
            }
        }

        fired
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn one_shot_fires_once() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(start, ms(100));

        assert!(timers.process_expired(start + ms(99)).is_empty());
        assert_eq!(timers.process_expired(start + ms(100)), vec![id]);
        assert!(!timers.is_active(id));
        assert!(timers.process_expired(start + ms(500)).is_empty());
    }

    #[test]
    fn stopped_timer_never_fires() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(start, ms(100));

        assert!(timers.stop(id).is_ok());
        assert!(timers.stop(id).is_err());
        assert_eq!(timers.next_fire(id), None);
        assert!(timers.process_expired(start + ms(200)).is_empty());
    }

    #[test]
    fn fired_in_order() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let late = timers.start_one_shot(start, ms(30));
        let early = timers.start_one_shot(start, ms(10));

        assert_eq!(timers.next_fire(late), Some(start + ms(30)));
        assert_eq!(timers.process_expired(start + ms(50)), vec![early, late]);
    }

    #[test]
    fn clear_drops_pending_timers() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(start, ms(10));

        timers.clear();

        assert!(!timers.is_active(id));
        assert!(timers.process_expired(start + ms(50)).is_empty());
    }
}

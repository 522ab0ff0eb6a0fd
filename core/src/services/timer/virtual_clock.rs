//! Deterministic scheduler driven by explicit time advancement

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::traits::{Scheduler, TimerId};

#[derive(Debug, Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    /// Pending timers ordered by (due time, id)
    pending: BTreeSet<(Duration, TimerId)>,
    scheduled_total: u64,
}

/// Virtual clock implementing [`Scheduler`]
///
/// Time only moves when the owner calls [`advance`](Self::advance),
/// [`advance_to`](Self::advance_to) or [`pop_due`](Self::pop_due). Clones
/// share the same clock, so a test can keep one handle while a controller
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    state: Arc<Mutex<ClockState>>,
}

impl VirtualClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ClockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current virtual time since creation
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of timers scheduled and not yet fired or cancelled
    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    /// Total number of timers ever scheduled
    pub fn scheduled_total(&self) -> u64 {
        self.lock().scheduled_total
    }

    /// Due time of the earliest pending timer
    pub fn next_due(&self) -> Option<Duration> {
        self.lock().pending.iter().next().map(|(due, _)| *due)
    }

    /// Move time forward by `by` and return every timer that became due,
    /// in due order (ties broken by scheduling order)
    ///
    /// Timers scheduled by the caller while handling the returned ids are
    /// relative to the new time. Use [`pop_due`](Self::pop_due) to fire
    /// chained timers at their exact due times.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        let mut state = self.lock();
        state.now += by;
        let now = state.now;
        let mut fired = Vec::new();
        while let Some(&(due, id)) = state.pending.iter().next() {
            if due > now {
                break;
            }
            state.pending.remove(&(due, id));
            fired.push(id);
        }
        fired
    }

    /// Fire the earliest timer due at or before `until`, moving time to its
    /// due time
    pub fn pop_due(&self, until: Duration) -> Option<TimerId> {
        let mut state = self.lock();
        let &(due, id) = state.pending.iter().next()?;
        if due > until {
            return None;
        }
        state.pending.remove(&(due, id));
        if due > state.now {
            state.now = due;
        }
        Some(id)
    }

    /// Move time forward to `until` without firing anything
    pub fn advance_to(&self, until: Duration) {
        let mut state = self.lock();
        if until > state.now {
            state.now = until;
        }
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&self, delay: Duration) -> TimerId {
        let mut state = self.lock();
        state.next_id += 1;
        state.scheduled_total += 1;
        let id = TimerId::from_raw(state.next_id);
        let due = state.now + delay;
        state.pending.insert((due, id));
        id
    }

    fn cancel(&self, id: TimerId) {
        self.lock().pending.retain(|(_, pending)| *pending != id);
    }
}

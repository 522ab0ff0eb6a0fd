//! Scheduler trait and timer handles

use std::sync::Arc;
use std::time::Duration;

/// Handle of a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Build a timer id from a raw counter value
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw counter value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Single-shot, cancellable timers
///
/// A fired timer is reported to the owner by id. Owners must ignore ids they
/// no longer track: a timer can fire in the window between the host
/// receiving it and the owner cancelling it.
pub trait Scheduler: Send + Sync {
    /// Schedule a timer that fires once after `delay`
    fn schedule(&self, delay: Duration) -> TimerId;

    /// Cancel a timer; unknown or already-fired ids are ignored
    fn cancel(&self, id: TimerId);
}

impl<T: Scheduler + ?Sized> Scheduler for Arc<T> {
    fn schedule(&self, delay: Duration) -> TimerId {
        (**self).schedule(delay)
    }

    fn cancel(&self, id: TimerId) {
        (**self).cancel(id)
    }
}

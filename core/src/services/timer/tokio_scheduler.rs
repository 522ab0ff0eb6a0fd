//! Scheduler backed by Tokio timers

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use super::traits::{Scheduler, TimerId};

#[derive(Debug, Default)]
struct TimerTable {
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

/// Real-time scheduler delivering fired timer ids on a channel
///
/// Each timer is a spawned task sleeping for its delay. Cancelling aborts
/// the task; dropping the scheduler aborts every pending timer.
#[derive(Debug)]
pub struct TokioScheduler {
    table: Mutex<TimerTable>,
    fired_tx: mpsc::UnboundedSender<TimerId>,
}

impl TokioScheduler {
    /// Create a scheduler and the receiver of fired timer ids
    ///
    /// # Panics
    ///
    /// Scheduling panics when called outside a Tokio runtime.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            table: Mutex::new(TimerTable::default()),
            fired_tx,
        };
        (scheduler, fired_rx)
    }

    fn lock(&self) -> MutexGuard<'_, TimerTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of timers that have not fired or been cancelled
    pub fn pending(&self) -> usize {
        let mut table = self.lock();
        table.tasks.retain(|_, task| !task.is_finished());
        table.tasks.len()
    }

    /// Abort every pending timer
    pub fn cancel_all(&self) {
        let mut table = self.lock();
        for (_, task) in table.tasks.drain() {
            task.abort();
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration) -> TimerId {
        let mut table = self.lock();
        table.tasks.retain(|_, task| !task.is_finished());
        table.next_id += 1;
        let id = TimerId::from_raw(table.next_id);

        let fired_tx = self.fired_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the owning session was torn down
            let _ = fired_tx.send(id);
        });
        table.tasks.insert(id, task);
        trace!(timer = %id, delay_ms = delay.as_millis() as u64, "Timer scheduled");
        id
    }

    fn cancel(&self, id: TimerId) {
        if let Some(task) = self.lock().tasks.remove(&id) {
            task.abort();
            trace!(timer = %id, "Timer cancelled");
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

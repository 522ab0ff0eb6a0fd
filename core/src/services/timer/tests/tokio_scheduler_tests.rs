//! Tests for the Tokio-backed scheduler

use std::time::Duration;

use crate::services::timer::{Scheduler, TokioScheduler};

#[tokio::test(start_paused = true)]
async fn test_fired_ids_are_delivered() {
    let (scheduler, mut fired) = TokioScheduler::new();
    let slow = scheduler.schedule(Duration::from_millis(300));
    let fast = scheduler.schedule(Duration::from_millis(100));

    assert_eq!(fired.recv().await, Some(fast));
    assert_eq!(fired.recv().await, Some(slow));
    assert_eq!(scheduler.pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_prevents_delivery() {
    let (scheduler, mut fired) = TokioScheduler::new();
    let cancelled = scheduler.schedule(Duration::from_millis(100));
    let kept = scheduler.schedule(Duration::from_millis(200));
    scheduler.cancel(cancelled);

    assert_eq!(fired.recv().await, Some(kept));
}

#[tokio::test(start_paused = true)]
async fn test_drop_aborts_pending_timers() {
    let (scheduler, mut fired) = TokioScheduler::new();
    scheduler.schedule(Duration::from_millis(100));
    assert_eq!(scheduler.pending(), 1);
    drop(scheduler);

    // Every sender is gone once the aborted task is dropped
    assert_eq!(fired.recv().await, None);
}

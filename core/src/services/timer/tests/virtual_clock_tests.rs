//! Tests for the virtual clock

use std::time::Duration;

use crate::services::timer::{Scheduler, VirtualClock};

#[test]
fn test_timers_fire_in_due_order() {
    let clock = VirtualClock::new();
    let late = clock.schedule(Duration::from_millis(500));
    let early = clock.schedule(Duration::from_millis(100));

    assert!(clock.advance(Duration::from_millis(99)).is_empty());
    assert_eq!(clock.advance(Duration::from_millis(1)), vec![early]);
    assert_eq!(clock.advance(Duration::from_secs(1)), vec![late]);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn test_cancelled_timer_never_fires() {
    let clock = VirtualClock::new();
    let id = clock.schedule(Duration::from_millis(300));
    clock.cancel(id);

    assert!(clock.advance(Duration::from_secs(10)).is_empty());
    assert_eq!(clock.scheduled_total(), 1);
}

#[test]
fn test_pop_due_moves_time_to_due_instant() {
    let clock = VirtualClock::new();
    let first = clock.schedule(Duration::from_secs(1));

    let until = Duration::from_secs(3);
    assert_eq!(clock.pop_due(until), Some(first));
    assert_eq!(clock.now(), Duration::from_secs(1));

    // A chained timer scheduled from the handler is relative to the due time
    let second = clock.schedule(Duration::from_secs(1));
    assert_eq!(clock.next_due(), Some(Duration::from_secs(2)));
    assert_eq!(clock.pop_due(until), Some(second));
    assert_eq!(clock.pop_due(until), None);

    clock.advance_to(until);
    assert_eq!(clock.now(), until);
}

#[test]
fn test_clones_share_time() {
    let clock = VirtualClock::new();
    let handle = clock.clone();
    handle.schedule(Duration::from_millis(10));

    assert_eq!(clock.pending(), 1);
    clock.advance(Duration::from_millis(10));
    assert_eq!(handle.now(), Duration::from_millis(10));
    assert_eq!(handle.pending(), 0);
}

//! Cancellable timer abstraction
//!
//! Controllers never sleep themselves. They ask a [`Scheduler`] for a timer
//! and get a [`TimerId`]; the host later hands fired ids back to the
//! controller that owns them. Two schedulers are provided:
//! - [`VirtualClock`] - deterministic time for tests and simulations
//! - [`TokioScheduler`] - real time on the Tokio runtime

mod tokio_scheduler;
mod traits;
mod virtual_clock;

#[cfg(test)]
mod tests;

pub use tokio_scheduler::TokioScheduler;
pub use traits::{Scheduler, TimerId};
pub use virtual_clock::VirtualClock;

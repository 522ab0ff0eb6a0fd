//! Debounced remote entity search
//!
//! This module turns free-text typing into a single selected entity:
//! - [`SearchSelector`] - the sans-IO controller (debounce, staleness, selection)
//! - [`SearchSession`] - async driver wiring the controller to a Tokio
//!   scheduler and an [`EntitySearchApi`]

mod selector;
mod session;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use selector::SearchSelector;
pub use session::SearchSession;
pub use traits::EntitySearchApi;
pub use types::{SearchEvent, SearchRequest, SearchUpdate};

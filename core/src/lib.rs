//! # LegalIntel Core
//!
//! Core client logic for the LegalIntel front end.
//! This crate contains domain entities, the debounced entity search and
//! email verification controllers, the async sessions that drive them,
//! the API traits they consume, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;

//! Shared utilities and common types for the LegalIntel client
//!
//! This crate provides common functionality used across all client crates:
//! - Configuration types
//! - Wire DTOs exchanged with the LegalIntel REST API
//! - Utility functions (email validation, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    ApiConfig, ClientConfig, Environment, LogFormat, LoggingConfig, OtpConfig, SearchConfig,
};
pub use types::api;
pub use utils::validation;

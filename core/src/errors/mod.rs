//! Domain-specific error types and error handling.

mod api_error;


pub use api_error::ApiError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    // Bridge to remote API failures
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl DomainError {
    /// Message suitable for inline display next to a form
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Validation { message } => message.clone(),
            DomainError::Storage { .. } => {
                String::from("Something went wrong. Please try again.")
            }
            DomainError::Api(err) => err.user_message(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

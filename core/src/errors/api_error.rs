//! Failures reported by the LegalIntel REST API collaborators

use thiserror::Error;

const NETWORK_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and try again.";
const DECODE_MESSAGE: &str = "Unexpected response from the server. Please try again.";
const GENERIC_MESSAGE: &str = "Request failed. Please try again.";

/// Error returned by any remote API call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a status code and optional detail
    pub fn status(status: u16, detail: Option<String>) -> Self {
        ApiError::Status { status, detail }
    }

    /// HTTP status, if the server answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the request itself (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(400..=499))
    }

    /// Message to show the user: the server's `detail` when present
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            ApiError::Status { status: 429, .. } => {
                String::from("Too many requests. Please wait a moment and try again.")
            }
            ApiError::Status { .. } => String::from(GENERIC_MESSAGE),
            ApiError::Network(_) => String::from(NETWORK_MESSAGE),
            ApiError::Decode(_) => String::from(DECODE_MESSAGE),
        }
    }
}

//! Trait for the email verification API collaborator

use async_trait::async_trait;

use crate::errors::ApiError;

/// Verification and resend endpoints
#[async_trait]
pub trait VerificationApi: Send + Sync {
    /// Verify an email address with the code the user entered
    async fn verify_email(&self, email: &str, code: &str) -> Result<(), ApiError>;

    /// Ask the server to send a fresh code
    async fn resend_verification_code(&self, email: &str) -> Result<(), ApiError>;
}

//! Trait for the authentication API collaborator

use async_trait::async_trait;

use crate::domain::entities::session::LoginResponse;
use crate::errors::ApiError;

/// Account creation form data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Login, signup and password reset endpoints
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a session
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// Create an account; the server emails a verification code
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;

    /// Send a password reset link
    async fn request_password_reset(&self, email: &str) -> Result<(), ApiError>;
}

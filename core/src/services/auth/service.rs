//! Authentication use cases

use std::sync::Arc;

use li_shared::validation::{is_valid_email, mask_email, normalize_email, not_blank};
use tracing::{info, warn};

use crate::domain::value_objects::route::Route;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::session_store::KeyValueStore;

use super::redirect::post_login_route;
use super::session::AuthSession;
use super::traits::{AuthApi, SignupRequest};

/// Minimum password length accepted at signup
const MIN_PASSWORD_LENGTH: usize = 8;

/// Login, signup and password reset flows
pub struct AuthService<A: AuthApi, K: KeyValueStore> {
    api: Arc<A>,
    session: AuthSession<K>,
}

impl<A: AuthApi, K: KeyValueStore> AuthService<A, K> {
    /// Create a new auth service
    ///
    /// # Arguments
    ///
    /// * `api` - Authentication API implementation
    /// * `store` - Key-value store backing the session
    pub fn new(api: Arc<A>, store: Arc<K>) -> Self {
        Self {
            api,
            session: AuthSession::new(store),
        }
    }

    /// Session accessor
    pub fn session(&self) -> &AuthSession<K> {
        &self.session
    }

    /// Sign in and decide where to go next
    ///
    /// Unverified accounts are not signed in; their address is kept as the
    /// pending verification email instead.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<Route> {
        let email = validate_email(email)?;
        if !not_blank(password) {
            return Err(DomainError::Validation {
                message: String::from("Password is required"),
            });
        }

        let response = self.api.login(&email, password).await.map_err(|err| {
            warn!(email = %mask_email(&email), error = %err, event = "login_failed", "Login failed");
            DomainError::from(err)
        })?;

        let route = post_login_route(&response);
        if route == Route::VerifyEmail {
            self.session
                .set_pending_verification_email(&response.email)
                .await?;
            info!(email = %mask_email(&response.email), "Login requires email verification");
            return Ok(route);
        }

        self.session.record_login(&response).await?;
        info!(
            email = %mask_email(&response.email),
            role = response.role.as_str(),
            route = %route,
            event = "login_succeeded",
            "User signed in"
        );
        Ok(route)
    }

    /// Create an account and continue to email verification
    pub async fn signup(&self, request: SignupRequest) -> DomainResult<Route> {
        let email = validate_email(&request.email)?;
        if !not_blank(&request.full_name) {
            return Err(DomainError::Validation {
                message: String::from("Full name is required"),
            });
        }
        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Validation {
                message: format!(
                    "Password must be at least {} characters",
                    MIN_PASSWORD_LENGTH
                ),
            });
        }

        let request = SignupRequest {
            full_name: request.full_name.trim().to_string(),
            email: email.clone(),
            password: request.password,
        };
        self.api.signup(&request).await?;
        self.session.set_pending_verification_email(&email).await?;

        info!(email = %mask_email(&email), event = "signup_succeeded", "Account created");
        Ok(Route::VerifyEmail)
    }

    /// Request a password reset link
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<Route> {
        let email = validate_email(email)?;
        self.api.request_password_reset(&email).await?;
        info!(email = %mask_email(&email), event = "password_reset_requested", "Reset link requested");
        Ok(Route::ResetPasswordSent)
    }

    /// Sign out
    pub async fn logout(&self) -> DomainResult<Route> {
        self.session.logout().await?;
        Ok(Route::Login)
    }
}

fn validate_email(email: &str) -> DomainResult<String> {
    if !is_valid_email(email) {
        return Err(DomainError::Validation {
            message: String::from("Please enter a valid email address"),
        });
    }
    Ok(normalize_email(email))
}

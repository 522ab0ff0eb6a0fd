//! Mock authentication API

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::session::{LoginResponse, UserRole};
use crate::errors::ApiError;
use crate::services::auth::traits::{AuthApi, SignupRequest};

pub struct MockAuthApi {
    pub login_result: Result<LoginResponse, ApiError>,
    pub should_fail: bool,
    pub signups: Arc<Mutex<Vec<SignupRequest>>>,
    pub resets: Arc<Mutex<Vec<String>>>,
}

impl MockAuthApi {
    pub fn returning(response: LoginResponse) -> Self {
        Self {
            login_result: Ok(response),
            should_fail: false,
            signups: Arc::new(Mutex::new(Vec::new())),
            resets: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn rejecting(error: ApiError) -> Self {
        Self {
            login_result: Err(error.clone()),
            should_fail: true,
            signups: Arc::new(Mutex::new(Vec::new())),
            resets: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, _email: &str, _password: &str) -> Result<LoginResponse, ApiError> {
        self.login_result.clone()
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        if self.should_fail {
            return Err(ApiError::status(409, Some("Email already registered".to_string())));
        }
        self.signups.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.resets.lock().unwrap().push(email.to_string());
        Ok(())
    }
}

pub fn login_response(role: UserRole, email_verified: bool, onboarded: bool) -> LoginResponse {
    LoginResponse {
        access_token: "token-abc".to_string(),
        role,
        email: "efua.owusu@example.com".to_string(),
        email_verified,
        onboarded,
    }
}

//! Authentication endpoints

use async_trait::async_trait;
use li_core::domain::entities::session::{LoginResponse, UserRole};
use li_core::errors::ApiError;
use li_core::services::auth::{AuthApi, SignupRequest};
use li_shared::api::{ForgotPasswordBody, LoginBody, LoginResponseBody, SignupBody};

use super::client::HttpApiClient;

const LOGIN_PATH: &str = "/auth/login";
const SIGNUP_PATH: &str = "/auth/signup";
const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";

#[async_trait]
impl AuthApi for HttpApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginBody {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponseBody = self.post_json(LOGIN_PATH, &body).await?;
        Ok(into_login_response(response))
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let body = SignupBody {
            full_name: request.full_name.clone(),
            email: request.email.clone(),
            password: request.password.clone(),
        };
        self.post_unit(SIGNUP_PATH, &body).await
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let body = ForgotPasswordBody {
            email: email.to_string(),
        };
        self.post_unit(FORGOT_PASSWORD_PATH, &body).await
    }
}

pub(crate) fn into_login_response(body: LoginResponseBody) -> LoginResponse {
    LoginResponse {
        access_token: body.access_token,
        role: UserRole::from_wire(body.user.role.as_deref()),
        email: body.user.email,
        email_verified: body.user.email_verified,
        onboarded: body.user.onboarded,
    }
}

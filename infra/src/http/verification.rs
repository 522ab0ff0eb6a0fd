//! Email verification endpoints

use async_trait::async_trait;
use li_core::errors::ApiError;
use li_core::services::verification::VerificationApi;
use li_shared::api::{ResendCodeBody, VerifyEmailBody};

use super::client::HttpApiClient;

const VERIFY_PATH: &str = "/auth/verify-email";
const RESEND_PATH: &str = "/auth/resend-verification-code";

#[async_trait]
impl VerificationApi for HttpApiClient {
    async fn verify_email(&self, email: &str, code: &str) -> Result<(), ApiError> {
        let body = VerifyEmailBody {
            email: email.to_string(),
            verification_code: code.to_string(),
        };
        self.post_unit(VERIFY_PATH, &body).await
    }

    async fn resend_verification_code(&self, email: &str) -> Result<(), ApiError> {
        let body = ResendCodeBody {
            email: email.to_string(),
        };
        self.post_unit(RESEND_PATH, &body).await
    }
}

//! End-to-end verification flow through the public session API

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use li_core::{ApiError, OtpEvent, OtpPhase, OtpUpdate, Route, VerificationApi, VerificationSession};
use li_shared::config::OtpConfig;

#[derive(Default)]
struct ScriptedApi {
    verify: Mutex<VecDeque<Result<(), ApiError>>>,
    resend: Mutex<VecDeque<Result<(), ApiError>>>,
    codes: Mutex<Vec<String>>,
}

impl ScriptedApi {
    fn verify_then(self, outcome: Result<(), ApiError>) -> Self {
        self.verify.lock().unwrap().push_back(outcome);
        self
    }

    fn resend_then(self, outcome: Result<(), ApiError>) -> Self {
        self.resend.lock().unwrap().push_back(outcome);
        self
    }
}

#[async_trait]
impl VerificationApi for ScriptedApi {
    async fn verify_email(&self, _email: &str, code: &str) -> Result<(), ApiError> {
        self.codes.lock().unwrap().push(code.to_string());
        self.verify.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn resend_verification_code(&self, _email: &str) -> Result<(), ApiError> {
        self.resend.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

fn short_config() -> OtpConfig {
    OtpConfig {
        countdown_seconds: 2,
        redirect_delay_secs: 3,
    }
}

#[tokio::test(start_paused = true)]
async fn pasted_code_verifies_and_redirects_once() {
    let api = Arc::new(ScriptedApi::default());
    let mut session =
        VerificationSession::new(api.clone(), "ama.mensah@example.com", OtpConfig::default()).unwrap();

    assert!(session.handle(OtpEvent::Paste("482 913".to_string())));
    assert!(session.handle(OtpEvent::Submit));
    assert!(!session.handle(OtpEvent::Submit));

    assert_eq!(session.next_update().await, Some(OtpUpdate::Verified));
    assert_eq!(session.controller().phase(), OtpPhase::Verified);
    assert!(!session.handle(OtpEvent::Digit { index: 0, ch: '1' }));

    let start = tokio::time::Instant::now();
    assert_eq!(session.next_update().await, Some(OtpUpdate::Navigate(Route::Login)));
    assert!(start.elapsed() >= std::time::Duration::from_secs(3));
    assert_eq!(session.next_update().await, None);
    assert_eq!(api.codes.lock().unwrap().as_slice(), ["482913"]);
}

#[tokio::test(start_paused = true)]
async fn rejection_then_resend_after_countdown() {
    let api = Arc::new(
        ScriptedApi::default()
            .verify_then(Err(ApiError::status(400, Some("Invalid verification code".to_string()))))
            .resend_then(Ok(())),
    );
    let mut session = VerificationSession::new(api, "kofi@example.com", short_config()).unwrap();

    for (index, ch) in "111111".chars().enumerate() {
        assert!(session.handle(OtpEvent::Digit { index, ch }));
    }
    assert!(session.handle(OtpEvent::Submit));
    assert_eq!(
        session.next_update().await,
        Some(OtpUpdate::Rejected("Invalid verification code".to_string()))
    );
    assert!(session.controller().has_failed());
    assert_eq!(session.controller().code().as_deref(), Some("111111"));

    assert!(!session.handle(OtpEvent::Resend));
    assert_eq!(session.next_update().await, Some(OtpUpdate::Tick(1)));
    assert_eq!(session.next_update().await, Some(OtpUpdate::ResendAvailable));

    assert!(session.handle(OtpEvent::Resend));
    assert_eq!(session.next_update().await, Some(OtpUpdate::CodeResent));
    assert_eq!(session.controller().countdown_seconds(), 2);
    assert!(session.controller().digits().is_empty_at(0));
    assert_eq!(session.controller().error(), None);
}

//! Mock implementations for testing the verification flow

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::errors::ApiError;
use crate::services::verification::traits::VerificationApi;

// Mock verification API replaying scripted outcomes
#[derive(Default)]
pub struct MockVerificationApi {
    pub verify_calls: Arc<Mutex<Vec<(String, String)>>>,
    pub resend_calls: Arc<Mutex<Vec<String>>>,
    pub verify_outcomes: Mutex<VecDeque<Result<(), ApiError>>>,
    pub resend_outcomes: Mutex<VecDeque<Result<(), ApiError>>>,
    pub latency: Option<Duration>,
    pub verify_panics: Mutex<u32>,
}

impl MockVerificationApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn then_verify(self, outcome: Result<(), ApiError>) -> Self {
        self.verify_outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn then_panic_on_verify(self) -> Self {
        *self.verify_panics.lock().unwrap() += 1;
        self
    }

    pub fn then_resend(self, outcome: Result<(), ApiError>) -> Self {
        self.resend_outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn verify_count(&self) -> usize {
        self.verify_calls.lock().unwrap().len()
    }

    pub fn resend_count(&self) -> usize {
        self.resend_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl VerificationApi for MockVerificationApi {
    async fn verify_email(&self, email: &str, code: &str) -> Result<(), ApiError> {
        self.verify_calls
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
        {
            let mut panics = self.verify_panics.lock().unwrap();
            if *panics > 0 {
                *panics -= 1;
                drop(panics);
                panic!("verification backend crashed");
            }
        }
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.verify_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn resend_verification_code(&self, email: &str) -> Result<(), ApiError> {
        self.resend_calls.lock().unwrap().push(email.to_string());
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.resend_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

pub fn rejected(detail: &str) -> ApiError {
    ApiError::status(400, Some(detail.to_string()))
}

//! Async driver for the verification form

use std::collections::HashMap;
use std::sync::Arc;

use li_shared::config::OtpConfig;
use tokio::sync::mpsc;
use tokio::task::{Id, JoinSet};
use tracing::{error, info};

use crate::errors::{ApiError, DomainResult};
use crate::services::timer::{TimerId, TokioScheduler};

use super::controller::OtpController;
use super::traits::VerificationApi;
use super::types::{OtpEffect, OtpEvent, OtpUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    Verify,
    Resend,
}

/// One mounted verification page on the Tokio runtime
///
/// Closing or dropping the session cancels the countdown and redirect
/// timers and aborts outstanding requests, so nothing mutates the form
/// after the page is gone.
pub struct VerificationSession<A: VerificationApi + 'static> {
    controller: OtpController<Arc<TokioScheduler>>,
    scheduler: Arc<TokioScheduler>,
    fired: mpsc::UnboundedReceiver<TimerId>,
    api: Arc<A>,
    in_flight: JoinSet<Result<(), ApiError>>,
    /// Kind of request behind each running task
    requests: HashMap<Id, RequestKind>,
}

impl<A: VerificationApi + 'static> VerificationSession<A> {
    /// Create a session for `email`; must be called within a Tokio runtime
    pub fn new(api: Arc<A>, email: &str, config: OtpConfig) -> DomainResult<Self> {
        let (scheduler, fired) = TokioScheduler::new();
        let scheduler = Arc::new(scheduler);
        let controller = OtpController::new(email, config, Arc::clone(&scheduler))?;
        Ok(Self {
            controller,
            scheduler,
            fired,
            api,
            in_flight: JoinSet::new(),
            requests: HashMap::new(),
        })
    }

    /// Apply a UI event; returns whether it was accepted
    pub fn handle(&mut self, event: OtpEvent) -> bool {
        match event {
            OtpEvent::Digit { index, ch } => self.controller.input_digit(index, ch),
            OtpEvent::Backspace { index } => self.controller.backspace(index),
            OtpEvent::Paste(text) => self.controller.paste(&text) > 0,
            OtpEvent::Submit => match self.controller.begin_submit() {
                Some(request) => {
                    let api = Arc::clone(&self.api);
                    let handle = self
                        .in_flight
                        .spawn(async move { api.verify_email(&request.email, &request.code).await });
                    self.requests.insert(handle.id(), RequestKind::Verify);
                    true
                }
                None => false,
            },
            OtpEvent::Resend => match self.controller.begin_resend() {
                Some(request) => {
                    let api = Arc::clone(&self.api);
                    let handle = self
                        .in_flight
                        .spawn(async move { api.resend_verification_code(&request.email).await });
                    self.requests.insert(handle.id(), RequestKind::Resend);
                    true
                }
                None => false,
            },
        }
    }

    /// Wait for the next countdown tick, redirect or request completion
    ///
    /// Returns `None` once nothing is pending.
    pub async fn next_update(&mut self) -> Option<OtpUpdate> {
        loop {
            if !self.controller.has_pending_timers() && self.in_flight.is_empty() {
                return None;
            }

            tokio::select! {
                Some(id) = self.fired.recv() => {
                    match self.controller.on_timer(id) {
                        Some(OtpEffect::Tick { remaining }) => return Some(OtpUpdate::Tick(remaining)),
                        Some(OtpEffect::ResendAvailable) => return Some(OtpUpdate::ResendAvailable),
                        Some(OtpEffect::Navigate(route)) => return Some(OtpUpdate::Navigate(route)),
                        None => {}
                    }
                }
                Some(joined) = self.in_flight.join_next_with_id(), if !self.in_flight.is_empty() => {
                    let (id, outcome) = match joined {
                        Ok((id, outcome)) => (id, outcome),
                        Err(join_err) if join_err.is_cancelled() => {
                            self.requests.remove(&join_err.id());
                            continue;
                        }
                        Err(join_err) => {
                            error!(error = %join_err, "Verification request task panicked");
                            let outcome = Err(ApiError::Network(format!("Verification task failed: {}", join_err)));
                            (join_err.id(), outcome)
                        }
                    };
                    if let Some(update) = self.apply(id, outcome) {
                        return Some(update);
                    }
                }
                else => return None,
            }
        }
    }

    fn apply(&mut self, id: Id, outcome: Result<(), ApiError>) -> Option<OtpUpdate> {
        let succeeded = outcome.is_ok();
        match self.requests.remove(&id)? {
            RequestKind::Verify => {
                if !self.controller.complete_submit(outcome) {
                    return None;
                }
                if succeeded {
                    return Some(OtpUpdate::Verified);
                }
                Some(OtpUpdate::Rejected(self.error_message()))
            }
            RequestKind::Resend => {
                if !self.controller.complete_resend(outcome) {
                    return None;
                }
                if succeeded {
                    return Some(OtpUpdate::CodeResent);
                }
                Some(OtpUpdate::ResendFailed(self.error_message()))
            }
        }
    }

    fn error_message(&self) -> String {
        self.controller.error().unwrap_or_default().to_string()
    }

    /// Tear the session down: no timer or response is applied afterwards
    pub fn close(&mut self) {
        self.controller.teardown();
        self.scheduler.cancel_all();
        // Dropping the set aborts every task in it
        drop(std::mem::take(&mut self.in_flight));
        self.requests.clear();
        info!("Verification session closed");
    }

    /// Controller state for rendering
    pub fn controller(&self) -> &OtpController<Arc<TokioScheduler>> {
        &self.controller
    }
}

impl<A: VerificationApi + 'static> Drop for VerificationSession<A> {
    fn drop(&mut self) {
        self.scheduler.cancel_all();
        self.in_flight.abort_all();
    }
}

//! Sans-IO controller for the email verification form

use std::time::Duration;

use li_shared::config::OtpConfig;
use li_shared::validation::{is_valid_email, mask_email, normalize_email};
use tracing::{debug, info, warn};

use crate::domain::entities::otp_code::{OtpDigits, CODE_LENGTH};
use crate::domain::value_objects::route::Route;
use crate::errors::{ApiError, DomainError, DomainResult};
use crate::services::timer::{Scheduler, TimerId};

use super::types::{OtpEffect, OtpPhase, ResendCodeRequest, VerifyEmailRequest};

const LAST_CELL: usize = CODE_LENGTH - 1;
const TICK: Duration = Duration::from_secs(1);

/// Verification form state for one pending email address
///
/// Every mutating call returns whether it was accepted. Once the code is
/// verified the form is frozen: edits, submissions and resends are refused
/// and exactly one navigation is scheduled.
pub struct OtpController<S: Scheduler> {
    email: String,
    config: OtpConfig,
    scheduler: S,
    digits: OtpDigits,
    focus_index: usize,
    phase: OtpPhase,
    countdown_seconds: u32,
    countdown_timer: Option<TimerId>,
    redirect_timer: Option<TimerId>,
    success_route: Route,
    navigated: bool,
    resend_in_flight: bool,
    error: Option<String>,
}

impl<S: Scheduler> OtpController<S> {
    /// Create the form for `email` and start the resend countdown
    pub fn new(email: &str, config: OtpConfig, scheduler: S) -> DomainResult<Self> {
        if !is_valid_email(email) {
            return Err(DomainError::Validation {
                message: String::from("A valid email address is required for verification"),
            });
        }

        let mut controller = Self {
            email: normalize_email(email),
            countdown_seconds: config.countdown_seconds,
            config,
            scheduler,
            digits: OtpDigits::new(),
            focus_index: 0,
            phase: OtpPhase::Entering,
            countdown_timer: None,
            redirect_timer: None,
            success_route: Route::Login,
            navigated: false,
            resend_in_flight: false,
            error: None,
        };
        controller.start_countdown();

        debug!(
            email = %mask_email(&controller.email),
            countdown = controller.countdown_seconds,
            "Verification form created"
        );
        Ok(controller)
    }

    /// Navigate somewhere other than the login page after success
    pub fn with_success_route(mut self, route: Route) -> Self {
        self.success_route = route;
        self
    }

    /// Type a character into a cell
    ///
    /// Non-digits are refused and leave every cell unchanged. A digit moves
    /// focus to the next empty cell on the right.
    pub fn input_digit(&mut self, index: usize, ch: char) -> bool {
        if !self.is_editable() || index >= CODE_LENGTH || !ch.is_ascii_digit() {
            return false;
        }

        self.digits.set(index, ch);
        self.error = None;
        self.focus_index = if index == LAST_CELL {
            LAST_CELL
        } else {
            self.digits
                .next_empty_after(index)
                .unwrap_or((index + 1).min(LAST_CELL))
        };
        true
    }

    /// Backspace in a cell
    ///
    /// A filled cell is emptied; an empty cell only moves focus left.
    pub fn backspace(&mut self, index: usize) -> bool {
        if !self.is_editable() || index >= CODE_LENGTH {
            return false;
        }

        if self.digits.is_empty_at(index) {
            self.focus_index = index.saturating_sub(1);
        } else {
            self.digits.clear(index);
            self.focus_index = index;
        }
        true
    }

    /// Distribute pasted text over the cells starting at cell 0
    ///
    /// Non-digits are stripped and at most six digits are used. Returns the
    /// number of cells written.
    pub fn paste(&mut self, text: &str) -> usize {
        if !self.is_editable() {
            return 0;
        }

        let pasted: Vec<char> = text
            .chars()
            .filter(char::is_ascii_digit)
            .take(CODE_LENGTH)
            .collect();
        for (index, ch) in pasted.iter().enumerate() {
            self.digits.set(index, *ch);
        }

        if !pasted.is_empty() {
            self.error = None;
        }
        self.focus_index = pasted.len().saturating_sub(1);
        pasted.len()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.phase == OtpPhase::Entering && !self.resend_in_flight && self.digits.is_complete()
    }

    /// Start a submission
    pub fn begin_submit(&mut self) -> Option<VerifyEmailRequest> {
        if !self.can_submit() {
            return None;
        }
        let code = self.digits.code()?;

        self.phase = OtpPhase::Submitting;
        self.error = None;
        info!(
            email = %mask_email(&self.email),
            event = "verification_submitted",
            "Submitting verification code"
        );
        Some(VerifyEmailRequest {
            email: self.email.clone(),
            code,
        })
    }

    /// Apply the outcome of a submission
    ///
    /// Failure returns to `Entering` with the server message and keeps the
    /// entered digits.
    pub fn complete_submit(&mut self, outcome: Result<(), ApiError>) -> bool {
        if self.phase != OtpPhase::Submitting {
            return false;
        }

        match outcome {
            Ok(()) => {
                self.phase = OtpPhase::Verified;
                self.error = None;
                self.cancel_countdown();
                if self.redirect_timer.is_none() && !self.navigated {
                    self.redirect_timer = Some(self.scheduler.schedule(self.config.redirect_delay()));
                }
                info!(
                    email = %mask_email(&self.email),
                    event = "email_verified",
                    "Email verified, redirect scheduled"
                );
            }
            Err(err) => {
                self.phase = OtpPhase::Entering;
                self.error = Some(err.user_message());
                warn!(
                    email = %mask_email(&self.email),
                    error = %err,
                    event = "verification_rejected",
                    "Verification code rejected"
                );
            }
        }
        true
    }

    /// Handle a fired timer
    pub fn on_timer(&mut self, id: TimerId) -> Option<OtpEffect> {
        if self.countdown_timer == Some(id) {
            self.countdown_timer = None;
            if self.phase == OtpPhase::Verified {
                return None;
            }

            self.countdown_seconds = self.countdown_seconds.saturating_sub(1);
            if self.countdown_seconds > 0 {
                self.countdown_timer = Some(self.scheduler.schedule(TICK));
                return Some(OtpEffect::Tick {
                    remaining: self.countdown_seconds,
                });
            }
            debug!(email = %mask_email(&self.email), "Resend countdown finished");
            return Some(OtpEffect::ResendAvailable);
        }

        if self.redirect_timer == Some(id) {
            self.redirect_timer = None;
            if self.navigated {
                return None;
            }
            self.navigated = true;
            return Some(OtpEffect::Navigate(self.success_route));
        }

        None
    }

    /// Whether the resend control is enabled
    pub fn can_resend(&self) -> bool {
        self.countdown_seconds == 0 && self.phase == OtpPhase::Entering && !self.resend_in_flight
    }

    /// Start a resend
    pub fn begin_resend(&mut self) -> Option<ResendCodeRequest> {
        if !self.can_resend() {
            return None;
        }
        self.resend_in_flight = true;
        info!(
            email = %mask_email(&self.email),
            event = "verification_resend_requested",
            "Requesting a new verification code"
        );
        Some(ResendCodeRequest {
            email: self.email.clone(),
        })
    }

    /// Apply the outcome of a resend
    ///
    /// Success restarts the countdown and clears the cells; failure leaves
    /// both untouched and sets an error. Cells are read-only while the
    /// resend is outstanding.
    pub fn complete_resend(&mut self, outcome: Result<(), ApiError>) -> bool {
        if !self.resend_in_flight {
            return false;
        }
        self.resend_in_flight = false;

        if self.phase == OtpPhase::Verified {
            return false;
        }

        match outcome {
            Ok(()) => {
                self.digits.clear_all();
                self.focus_index = 0;
                self.error = None;
                self.phase = OtpPhase::Entering;
                self.countdown_seconds = self.config.countdown_seconds;
                self.start_countdown();
                info!(email = %mask_email(&self.email), event = "verification_resent", "New code sent");
            }
            Err(err) => {
                self.error = Some(err.user_message());
                warn!(
                    email = %mask_email(&self.email),
                    error = %err,
                    event = "verification_resend_failed",
                    "Failed to resend verification code"
                );
            }
        }
        true
    }

    /// Cancel every timer before the page goes away
    pub fn teardown(&mut self) {
        self.cancel_countdown();
        if let Some(id) = self.redirect_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn start_countdown(&mut self) {
        self.cancel_countdown();
        if self.countdown_seconds > 0 {
            self.countdown_timer = Some(self.scheduler.schedule(TICK));
        }
    }

    fn cancel_countdown(&mut self) {
        if let Some(id) = self.countdown_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn is_editable(&self) -> bool {
        self.phase == OtpPhase::Entering && !self.resend_in_flight
    }

    /// Email address being verified
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Digit cells
    pub fn digits(&self) -> &OtpDigits {
        &self.digits
    }

    /// Complete code, if all cells are filled
    pub fn code(&self) -> Option<String> {
        self.digits.code()
    }

    /// Cell the renderer should focus
    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// Current phase
    pub fn phase(&self) -> OtpPhase {
        self.phase
    }

    /// Seconds until resend is enabled
    pub fn countdown_seconds(&self) -> u32 {
        self.countdown_seconds
    }

    /// Inline error message
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the last attempt failed and the form is editable again
    pub fn has_failed(&self) -> bool {
        self.phase == OtpPhase::Entering && self.error.is_some()
    }

    /// Whether the form is frozen after a successful verification
    pub fn is_locked(&self) -> bool {
        self.phase == OtpPhase::Verified
    }

    /// Whether a request is outstanding
    pub fn is_busy(&self) -> bool {
        self.phase == OtpPhase::Submitting || self.resend_in_flight
    }

    /// Whether any countdown or redirect timer is pending
    pub fn has_pending_timers(&self) -> bool {
        self.countdown_timer.is_some() || self.redirect_timer.is_some()
    }
}

//! Email verification module for the segmented one-time code flow
//!
//! This module provides:
//! - Six-cell code entry with auto-advance focus and paste distribution
//! - A countdown that gates the resend action
//! - Submission with a terminal verified state and delayed redirect
//! - An async session wiring it all to Tokio timers and a [`VerificationApi`]

mod controller;
mod session;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use controller::OtpController;
pub use session::VerificationSession;
pub use traits::VerificationApi;
pub use types::{OtpEffect, OtpEvent, OtpPhase, OtpUpdate, ResendCodeRequest, VerifyEmailRequest};

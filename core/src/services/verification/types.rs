//! Types for the email verification flow

use crate::domain::value_objects::route::Route;

/// Phase of the verification form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPhase {
    /// The user is typing; a failed attempt returns here with an error set
    Entering,
    /// A verification request is outstanding
    Submitting,
    /// The code was accepted; terminal for this form
    Verified,
}

/// Verification request the controller wants issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

/// Resend request the controller wants issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendCodeRequest {
    pub email: String,
}

/// Effect of a fired timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpEffect {
    /// The countdown moved; seconds remaining
    Tick { remaining: u32 },
    /// The countdown reached zero
    ResendAvailable,
    /// The success delay elapsed; navigate away
    Navigate(Route),
}

/// UI events fed into a verification session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpEvent {
    Digit { index: usize, ch: char },
    Backspace { index: usize },
    Paste(String),
    Submit,
    Resend,
}

/// Progress reported by a verification session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpUpdate {
    Tick(u32),
    ResendAvailable,
    Verified,
    Rejected(String),
    CodeResent,
    ResendFailed(String),
    Navigate(Route),
}

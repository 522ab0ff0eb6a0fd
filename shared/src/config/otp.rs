//! Email verification (OTP) configuration module

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::env_or;

/// Timing configuration for the email verification flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds before the resend action becomes available
    #[serde(default = "default_countdown_seconds")]
    pub countdown_seconds: u32,

    /// Seconds the success state is shown before navigating away
    #[serde(default = "default_redirect_delay_secs")]
    pub redirect_delay_secs: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: default_countdown_seconds(),
            redirect_delay_secs: default_redirect_delay_secs(),
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            countdown_seconds: env_or("LEGALINTEL_OTP_COUNTDOWN_SECS", default_countdown_seconds()),
            redirect_delay_secs: env_or(
                "LEGALINTEL_OTP_REDIRECT_DELAY_SECS",
                default_redirect_delay_secs(),
            ),
        }
    }

    /// Redirect delay as a `Duration`
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_secs(self.redirect_delay_secs)
    }
}

fn default_countdown_seconds() -> u32 {
    120
}

fn default_redirect_delay_secs() -> u64 {
    3
}

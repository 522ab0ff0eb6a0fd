//! Client services containing the interaction logic.

pub mod auth;
pub mod search;
pub mod timer;
pub mod verification;

// Re-export commonly used types
pub use auth::{post_login_route, AuthApi, AuthService, AuthSession, SignupRequest};
pub use search::{EntitySearchApi, SearchEvent, SearchRequest, SearchSelector, SearchSession, SearchUpdate};
pub use timer::{Scheduler, TimerId, TokioScheduler, VirtualClock};
pub use verification::{
    OtpController, OtpEffect, OtpEvent, OtpPhase, OtpUpdate, VerificationApi, VerificationSession,
};

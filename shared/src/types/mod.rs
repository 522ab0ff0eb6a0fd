//! Type definitions shared across crates
//!
//! - `api` - request and response bodies of the LegalIntel REST API

pub mod api;

pub use api::{
    EntitySearchResponse, ErrorBody, ForgotPasswordBody, LoginBody, LoginResponseBody,
    LoginUserBody, ResendCodeBody, SignupBody, VerifyEmailBody, WireEntity,
};

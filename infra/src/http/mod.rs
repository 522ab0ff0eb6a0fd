//! HTTP client for the LegalIntel REST API
//!
//! [`HttpApiClient`] implements every API trait the core consumes:
//! - [`EntitySearchApi`](li_core::EntitySearchApi) - `GET /entities/search`
//! - [`VerificationApi`](li_core::VerificationApi) - `/auth/verify-email`, `/auth/resend-verification-code`
//! - [`AuthApi`](li_core::AuthApi) - `/auth/login`, `/auth/signup`, `/auth/forgot-password`

mod auth;
mod client;
mod search;
mod verification;


pub use client::HttpApiClient;
pub use search::into_matches;

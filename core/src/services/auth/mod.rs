//! Authentication glue around the verification flow
//!
//! - [`AuthSession`] - typed view over the injected key-value store
//! - [`post_login_route`] - role-based redirect after login
//! - [`AuthService`] - login, signup and password reset use cases

mod redirect;
mod service;
mod session;
mod traits;

#[cfg(test)]
mod tests;

pub use redirect::post_login_route;
pub use service::AuthService;
pub use session::AuthSession;
pub use traits::{AuthApi, SignupRequest};

//! Role-based redirect after login

use crate::domain::entities::session::{LoginResponse, UserRole};
use crate::domain::value_objects::route::Route;

/// Page to open after a successful login
///
/// Unverified accounts must verify first; administrators skip onboarding.
pub fn post_login_route(response: &LoginResponse) -> Route {
    if !response.email_verified {
        return Route::VerifyEmail;
    }
    match response.role {
        UserRole::Admin => Route::AdminDashboard,
        UserRole::User | UserRole::Lawyer if !response.onboarded => Route::Onboarding,
        UserRole::User | UserRole::Lawyer => Route::Dashboard,
    }
}

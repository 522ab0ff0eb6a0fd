//! Tests for the post-login redirect

use crate::domain::entities::session::UserRole;
use crate::domain::value_objects::route::Route;
use crate::services::auth::post_login_route;

use super::mocks::login_response;

#[test]
fn test_unverified_accounts_verify_first() {
    for role in [UserRole::User, UserRole::Lawyer, UserRole::Admin] {
        assert_eq!(post_login_route(&login_response(role, false, true)), Route::VerifyEmail);
    }
}

#[test]
fn test_admin_goes_to_admin_dashboard() {
    assert_eq!(
        post_login_route(&login_response(UserRole::Admin, true, false)),
        Route::AdminDashboard
    );
}

#[test]
fn test_onboarding_before_dashboard() {
    assert_eq!(
        post_login_route(&login_response(UserRole::User, true, false)),
        Route::Onboarding
    );
    assert_eq!(
        post_login_route(&login_response(UserRole::Lawyer, true, true)),
        Route::Dashboard
    );
}

//! Navigation targets the client logic can request.

use serde::{Deserialize, Serialize};

/// A page the host UI should navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    VerifyEmail,
    Onboarding,
    Dashboard,
    AdminDashboard,
    ResetPasswordSent,
}

impl Route {
    /// URL path of the page
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::VerifyEmail => "/verify-email",
            Route::Onboarding => "/onboarding",
            Route::Dashboard => "/dashboard",
            Route::AdminDashboard => "/admin/dashboard",
            Route::ResetPasswordSent => "/forgot-password/sent",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

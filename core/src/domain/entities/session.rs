//! Authenticated user session as reported by the login endpoint.

use serde::{Deserialize, Serialize};

/// Role of a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular subscriber
    #[default]
    User,
    /// Legal professional account
    Lawyer,
    /// Platform administrator
    Admin,
}

impl UserRole {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Lawyer => "lawyer",
            UserRole::Admin => "admin",
        }
    }

    /// Parse a role reported by the server; unknown or missing roles are `User`
    pub fn from_wire(role: Option<&str>) -> Self {
        match role.map(|r| r.trim().to_lowercase()).as_deref() {
            Some("admin") | Some("administrator") => UserRole::Admin,
            Some("lawyer") => UserRole::Lawyer,
            _ => UserRole::User,
        }
    }
}

/// Outcome of a successful login request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Role of the user
    pub role: UserRole,
    /// Email address of the account
    pub email: String,
    /// Whether the email address has been verified
    pub email_verified: bool,
    /// Whether account onboarding has been completed
    pub onboarded: bool,
}

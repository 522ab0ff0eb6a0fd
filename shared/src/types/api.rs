//! Wire bodies of the LegalIntel REST API
//!
//! These mirror the JSON the server speaks. Domain types live in `li_core`;
//! the infrastructure layer converts between the two.

use serde::{Deserialize, Serialize};

/// Response of `GET /entities/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntitySearchResponse {
    /// Matches in server relevance order
    #[serde(default)]
    pub results: Vec<WireEntity>,
}

/// A single search match as sent by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEntity {
    pub id: i64,
    /// Entity kind, e.g. "company", "bank", "insurance"
    #[serde(rename = "type")]
    pub entity_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

/// Body of `POST /auth/verify-email`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailBody {
    pub email: String,
    pub verification_code: String,
}

/// Body of `POST /auth/resend-verification-code`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendCodeBody {
    pub email: String,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponseBody {
    pub access_token: String,
    pub user: LoginUserBody,
}

/// User summary embedded in the login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUserBody {
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub onboarded: bool,
}

/// Body of `POST /auth/signup`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupBody {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/forgot-password`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordBody {
    pub email: String,
}

/// Error body returned with non-success statuses
///
/// The server usually sends `{"detail": "..."}`; validation failures may
/// send a list of objects instead, which is flattened into one message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable detail message, if the body carried one
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(s) => Some(s.clone()),
                        serde_json::Value::Object(map) => map
                            .get("msg")
                            .and_then(|m| m.as_str())
                            .map(str::to_string),
                        _ => None,
                    })
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}

//! REST API configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// LegalIntel REST API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing slash
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8000"),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Create a new API configuration with base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_env_with_default(Self::default())
    }

    /// Apply environment overrides on top of `base`
    pub fn from_env_with_default(base: Self) -> Self {
        let base_url = std::env::var("LEGALINTEL_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(base.base_url);

        Self {
            base_url,
            timeout_secs: env_or("LEGALINTEL_API_TIMEOUT_SECS", base.timeout_secs),
            connect_timeout_secs: env_or(
                "LEGALINTEL_API_CONNECT_TIMEOUT_SECS",
                base.connect_timeout_secs,
            ),
            user_agent: base.user_agent,
        }
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("legalintel-client/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(
            config.endpoint("/auth/verify-email"),
            "https://api.example.com/auth/verify-email"
        );
        assert_eq!(
            config.endpoint("entities/search"),
            "https://api.example.com/entities/search"
        );
    }
}

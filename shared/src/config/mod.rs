//! Configuration module with feature-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `api` - REST API endpoint and HTTP client configuration
//! - `environment` - Environment detection and logging configuration
//! - `otp` - Email verification countdown and redirect timing
//! - `search` - Entity search debounce and limits

pub mod api;
pub mod environment;
pub mod otp;
pub mod search;

use serde::{Deserialize, Serialize};

pub use api::ApiConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::OtpConfig;
pub use search::SearchConfig;

/// Complete client configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Environment configuration
    pub environment: Environment,

    /// REST API configuration
    pub api: ApiConfig,

    /// Entity search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Email verification configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            api: ApiConfig::default(),
            search: SearchConfig::default(),
            otp: OtpConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl ClientConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig::default(),
            search: SearchConfig::default(),
            otp: OtpConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig::new("https://api.legalintel.com.gh"),
            search: SearchConfig::default(),
            otp: OtpConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    ///
    /// Starts from the environment preset and lets `LEGALINTEL_*` variables
    /// override individual values.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };

        config.api = ApiConfig::from_env_with_default(config.api);
        config.search = SearchConfig::from_env();
        config.otp = OtpConfig::from_env();
        config.logging = config.logging.with_env_overrides();
        config
    }
}

/// Read an environment variable and parse it, falling back to `default`
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_timings() {
        let config = ClientConfig::default();
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.min_query_length, 2);
        assert_eq!(config.otp.countdown_seconds, 120);
        assert_eq!(config.otp.redirect_delay_secs, 3);
    }

    #[test]
    fn test_production_config() {
        let config = ClientConfig::production();
        assert!(config.environment.is_production());
        assert!(config.api.base_url.starts_with("https://"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_config_deserializes_with_missing_sections() {
        let json = r#"{
            "environment": "staging",
            "api": { "base_url": "http://localhost:9000" }
        }"#;
        let config: ClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.search.result_limit, 10);
    }
}

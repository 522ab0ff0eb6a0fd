//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the LegalIntel client.
//! It provides concrete implementations of the core API traits on top of
//! the LegalIntel REST API.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **HTTP**: a reqwest client implementing the search, verification and
//!   authentication API traits
//! - **Telemetry**: tracing subscriber bootstrap
//! - **Configuration**: `.env` loading on top of the shared config

// Re-export core types for convenience
pub use li_core::errors::*;

/// HTTP module - REST API client
pub mod http;

/// Telemetry module - tracing subscriber setup
pub mod telemetry;

pub use http::HttpApiClient;

use std::path::{Path, PathBuf};

use li_shared::config::{ClientConfig, Environment};

/// Load client configuration from the environment
///
/// The dotenv file of the environment named by `ENVIRONMENT` (for example
/// `.env.production`) is loaded first, then `.env`. Variables already set
/// are never overridden. Fails when the API base URL is not an absolute
/// http(s) URL.
pub fn load_config() -> Result<ClientConfig, InfrastructureError> {
    load_env_files(Path::new("."), Environment::from_env());

    let config = ClientConfig::from_env();
    validate_base_url(&config.api.base_url)?;

    tracing::debug!(
        environment = %config.environment,
        base_url = %config.api.base_url,
        "Client configuration loaded"
    );
    Ok(config)
}

/// Load the dotenv files found in `dir`, returning the ones that were read
fn load_env_files(dir: &Path, environment: Environment) -> Vec<PathBuf> {
    [environment.env_file(), ".env"]
        .into_iter()
        .map(|name| dir.join(name))
        .filter(|path| dotenvy::from_path(path).is_ok())
        .inspect(|path| tracing::debug!(file = %path.display(), "Loaded dotenv file"))
        .collect()
}

fn validate_base_url(base_url: &str) -> Result<(), InfrastructureError> {
    let url = reqwest::Url::parse(base_url).map_err(|e| {
        InfrastructureError::Config(format!(
            "LEGALINTEL_API_BASE_URL '{}' is not a valid URL: {}",
            base_url, e
        ))
    })?;

    let is_http = matches!(url.scheme(), "http" | "https");
    let has_host = url.host_str().is_some_and(|host| !host.is_empty());
    if !is_http || !has_host {
        return Err(InfrastructureError::Config(format!(
            "LEGALINTEL_API_BASE_URL must be an absolute http(s) URL, got '{}'",
            base_url
        )));
    }
    Ok(())
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_validation() {
        assert!(validate_base_url("http://localhost:8000").is_ok());
        assert!(validate_base_url("https://api.legalintel.gh/v1").is_ok());

        assert!(matches!(
            validate_base_url("localhost:8000"),
            Err(InfrastructureError::Config(_))
        ));
        assert!(validate_base_url("https://").is_err());
        assert!(validate_base_url("").is_err());
        assert!(validate_base_url("ftp://files.legalintel.gh").is_err());
        assert!(validate_base_url("mailto:support@legalintel.gh").is_err());
    }

    #[test]
    fn test_environment_file_loaded_before_dotenv() {
        let dir = std::env::temp_dir().join(format!("li_infra_env_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(".env.staging"), "LI_INFRA_TEST_ORIGIN=staging\n").unwrap();
        std::fs::write(
            dir.join(".env"),
            "LI_INFRA_TEST_ORIGIN=base\nLI_INFRA_TEST_BASE_ONLY=yes\n",
        )
        .unwrap();

        let loaded = load_env_files(&dir, Environment::Staging);
        assert_eq!(loaded, vec![dir.join(".env.staging"), dir.join(".env")]);
        assert_eq!(std::env::var("LI_INFRA_TEST_ORIGIN").unwrap(), "staging");
        assert_eq!(std::env::var("LI_INFRA_TEST_BASE_ONLY").unwrap(), "yes");

        let loaded = load_env_files(&dir, Environment::Production);
        assert_eq!(loaded, vec![dir.join(".env")]);

        std::fs::remove_dir_all(&dir).ok();
    }
}

//! reqwest-backed API client and response mapping

use std::time::Duration;

use li_core::errors::ApiError;
use li_shared::api::ErrorBody;
use li_shared::config::ApiConfig;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::InfrastructureError;

/// Client for the LegalIntel REST API
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    config: ApiConfig,
}

impl HttpApiClient {
    /// Create a client with the configured timeouts and user agent
    pub fn new(config: ApiConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "LegalIntel API client initialized"
        );
        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(ApiConfig::from_env())
    }

    /// Active configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let body = self.send(self.client.get(&url).query(query), path).await?;
        decode(&body, path)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let body = self.send(self.client.post(&url).json(payload), path).await?;
        decode(&body, path)
    }

    /// POST where only the status matters
    pub(crate) async fn post_unit<B: Serialize>(&self, path: &str, payload: &B) -> Result<(), ApiError> {
        let url = self.config.endpoint(path);
        self.send(self.client.post(&url).json(payload), path).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Vec<u8>, ApiError> {
        debug!(endpoint = path, event = "api_request", "Sending API request");

        let response = request.send().await.map_err(|e| {
            warn!(endpoint = path, error = %e, event = "api_unreachable", "API request failed");
            transport_error(&e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| transport_error(&e))?;
        debug!(endpoint = path, status = status.as_u16(), event = "api_response", "API response received");

        if !status.is_success() {
            let err = status_error(status, &body);
            warn!(endpoint = path, error = %err, event = "api_error", "API returned an error status");
            return Err(err);
        }
        Ok(body.to_vec())
    }
}

/// Map a reqwest transport failure
pub(crate) fn transport_error(err: &reqwest::Error) -> ApiError {
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    if err.is_timeout() {
        return ApiError::Network(format!("Request timed out: {}", err));
    }
    ApiError::Network(err.to_string())
}

/// Build a status error, taking `detail` from a JSON error body when present
pub(crate) fn status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message());
    ApiError::status(status.as_u16(), detail)
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8], path: &str) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(endpoint = path, error = %e, event = "api_decode_failed", "Undecodable API response");
        ApiError::Decode(e.to_string())
    })
}

//! Entity search configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Debounced entity search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Typing pause before a search request is issued, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Minimum query length (in characters) that triggers a search
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,

    /// Maximum number of matches requested from the server
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_length: default_min_query_length(),
            result_limit: default_result_limit(),
        }
    }
}

impl SearchConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            debounce_ms: env_or("LEGALINTEL_SEARCH_DEBOUNCE_MS", default_debounce_ms()),
            min_query_length: env_or(
                "LEGALINTEL_SEARCH_MIN_QUERY_LENGTH",
                default_min_query_length(),
            )
            .max(1),
            result_limit: env_or("LEGALINTEL_SEARCH_LIMIT", default_result_limit()).max(1),
        }
    }

    /// Debounce interval as a `Duration`
    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_min_query_length() -> usize {
    2
}

fn default_result_limit() -> u32 {
    10
}

//! Trait for the remote entity search collaborator

use async_trait::async_trait;

use crate::domain::entities::entity_match::EntityMatch;
use crate::errors::ApiError;

/// Remote entity search endpoint
#[async_trait]
pub trait EntitySearchApi: Send + Sync {
    /// Search entities by free text, returning matches in relevance order
    async fn search_entities(&self, query: &str, limit: u32)
        -> Result<Vec<EntityMatch>, ApiError>;
}

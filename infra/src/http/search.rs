//! Entity search endpoint

use async_trait::async_trait;
use li_core::domain::entities::entity_match::{EntityMatch, EntityType};
use li_core::errors::ApiError;
use li_core::services::search::EntitySearchApi;
use li_shared::api::EntitySearchResponse;
use tracing::warn;

use super::client::HttpApiClient;

const SEARCH_PATH: &str = "/entities/search";

#[async_trait]
impl EntitySearchApi for HttpApiClient {
    async fn search_entities(&self, query: &str, limit: u32) -> Result<Vec<EntityMatch>, ApiError> {
        let params = [("query", query.to_string()), ("limit", limit.to_string())];
        let response: EntitySearchResponse = self.get_json(SEARCH_PATH, &params).await?;
        Ok(into_matches(response))
    }
}

/// Convert the wire response, keeping server order
///
/// Entries with an entity type this client does not know are skipped.
pub fn into_matches(response: EntitySearchResponse) -> Vec<EntityMatch> {
    response
        .results
        .into_iter()
        .filter_map(|wire| match wire.entity_type.parse::<EntityType>() {
            Ok(entity_type) => Some(EntityMatch {
                id: wire.id,
                entity_type,
                name: wire.name,
                short_name: wire.short_name.filter(|s| !s.trim().is_empty()),
            }),
            Err(reason) => {
                warn!(id = wire.id, reason = %reason, event = "search_entity_skipped", "Skipping search result");
                None
            }
        })
        .collect()
}

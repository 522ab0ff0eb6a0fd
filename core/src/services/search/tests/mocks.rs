//! Mock implementations for testing entity search

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::entities::entity_match::{EntityMatch, EntityType};
use crate::errors::ApiError;
use crate::services::search::traits::EntitySearchApi;

// Mock search API with canned responses and per-query latency
#[derive(Default)]
pub struct MockSearchApi {
    pub calls: Arc<Mutex<Vec<(String, u32)>>>,
    pub responses: Mutex<HashMap<String, Vec<EntityMatch>>>,
    pub delays: Mutex<HashMap<String, Duration>>,
    pub should_fail: bool,
    pub should_panic: bool,
}

impl MockSearchApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn panicking() -> Self {
        Self {
            should_panic: true,
            ..Self::default()
        }
    }

    pub fn with_response(self, query: &str, matches: Vec<EntityMatch>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(query.to_string(), matches);
        self
    }

    pub fn with_delay(self, query: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(query.to_string(), delay);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(q, _)| q.clone()).collect()
    }
}

#[async_trait]
impl EntitySearchApi for MockSearchApi {
    async fn search_entities(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<EntityMatch>, ApiError> {
        self.calls.lock().unwrap().push((query.to_string(), limit));
        if self.should_panic {
            panic!("search backend crashed");
        }

        let delay = self.delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail {
            return Err(ApiError::status(503, Some("Search unavailable".to_string())));
        }
        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}

pub fn gold_fields() -> EntityMatch {
    EntityMatch::new(7, EntityType::Company, "Gold Fields Ghana Limited")
}

pub fn gcb_bank() -> EntityMatch {
    EntityMatch::new(12, EntityType::Bank, "GCB Bank PLC").with_short_name("GCB")
}

pub fn enterprise_insurance() -> EntityMatch {
    EntityMatch::new(31, EntityType::Insurance, "Enterprise Insurance Ltd")
}

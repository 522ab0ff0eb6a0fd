//! Async driver for the search selector

use std::collections::HashMap;
use std::sync::Arc;

use li_shared::config::SearchConfig;
use tokio::sync::mpsc;
use tokio::task::{Id, JoinSet};
use tracing::{error, info};

use crate::domain::entities::entity_match::EntityMatch;
use crate::errors::ApiError;
use crate::services::timer::{TimerId, TokioScheduler};

use super::selector::SearchSelector;
use super::traits::EntitySearchApi;
use super::types::{SearchEvent, SearchRequest, SearchUpdate};

type SearchOutcome = Result<Vec<EntityMatch>, ApiError>;

/// One mounted search widget on the Tokio runtime
///
/// UI events go in through [`handle`](Self::handle); timer fires and
/// request completions come out of [`next_update`](Self::next_update).
/// Requests are never aborted because a newer query superseded them; their
/// responses are discarded by the selector instead. Closing or dropping the
/// session aborts timers and in-flight requests.
pub struct SearchSession<A: EntitySearchApi + 'static> {
    selector: SearchSelector<Arc<TokioScheduler>>,
    scheduler: Arc<TokioScheduler>,
    fired: mpsc::UnboundedReceiver<TimerId>,
    api: Arc<A>,
    in_flight: JoinSet<SearchOutcome>,
    /// Request behind each running task
    requests: HashMap<Id, SearchRequest>,
}

impl<A: EntitySearchApi + 'static> SearchSession<A> {
    /// Create a session; must be called within a Tokio runtime
    pub fn new(api: Arc<A>, config: SearchConfig) -> Self {
        let (scheduler, fired) = TokioScheduler::new();
        let scheduler = Arc::new(scheduler);
        Self {
            selector: SearchSelector::new(config, Arc::clone(&scheduler)),
            scheduler,
            fired,
            api,
            in_flight: JoinSet::new(),
            requests: HashMap::new(),
        }
    }

    /// Apply a UI event; returns the committed match for `Select`
    pub fn handle(&mut self, event: SearchEvent) -> Option<EntityMatch> {
        match event {
            SearchEvent::Input(text) => {
                self.selector.input(text);
                None
            }
            SearchEvent::Select(index) => self.selector.select(index),
            SearchEvent::Clear => {
                self.selector.clear();
                None
            }
            SearchEvent::Dismiss => {
                self.selector.dismiss();
                None
            }
        }
    }

    /// Wait for the next timer fire or request completion
    ///
    /// Returns `None` once nothing is pending.
    pub async fn next_update(&mut self) -> Option<SearchUpdate> {
        loop {
            if !self.selector.has_pending_debounce() && self.in_flight.is_empty() {
                return None;
            }

            tokio::select! {
                Some(id) = self.fired.recv() => {
                    if let Some(request) = self.selector.on_timer(id) {
                        let query = request.query.clone();
                        self.spawn_request(request);
                        return Some(SearchUpdate::Searching { query });
                    }
                }
                Some(joined) = self.in_flight.join_next_with_id(), if !self.in_flight.is_empty() => {
                    let (id, outcome) = match joined {
                        Ok((id, outcome)) => (id, outcome),
                        Err(join_err) if join_err.is_cancelled() => {
                            self.requests.remove(&join_err.id());
                            continue;
                        }
                        Err(join_err) => {
                            error!(error = %join_err, "Search request task panicked");
                            let outcome = Err(ApiError::Network(format!("Search task failed: {}", join_err)));
                            (join_err.id(), outcome)
                        }
                    };
                    if let Some(update) = self.apply(id, outcome) {
                        return Some(update);
                    }
                }
                else => return None,
            }
        }
    }

    fn spawn_request(&mut self, request: SearchRequest) {
        let api = Arc::clone(&self.api);
        let (query, limit) = (request.query.clone(), request.limit);
        let handle = self
            .in_flight
            .spawn(async move { api.search_entities(&query, limit).await });
        self.requests.insert(handle.id(), request);
    }

    fn apply(&mut self, id: Id, outcome: SearchOutcome) -> Option<SearchUpdate> {
        let request = self.requests.remove(&id)?;
        let query = request.query.clone();
        if self.selector.apply_response(&request, outcome) {
            let matches = self.selector.results().unwrap_or_default().to_vec();
            return Some(SearchUpdate::Results { query, matches });
        }
        Some(SearchUpdate::Stale { query })
    }

    /// Tear the session down: no timer or response is applied afterwards
    pub fn close(&mut self) {
        self.selector.teardown();
        self.scheduler.cancel_all();
        // Dropping the set aborts every task in it
        drop(std::mem::take(&mut self.in_flight));
        self.requests.clear();
        info!("Search session closed");
    }

    /// Controller state for rendering
    pub fn selector(&self) -> &SearchSelector<Arc<TokioScheduler>> {
        &self.selector
    }

    /// Number of requests still running
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

impl<A: EntitySearchApi + 'static> Drop for SearchSession<A> {
    fn drop(&mut self) {
        self.scheduler.cancel_all();
        self.in_flight.abort_all();
    }
}

//! Sans-IO controller for the debounced entity search selector

use li_shared::config::SearchConfig;
use tracing::{debug, warn};

use crate::domain::entities::entity_match::EntityMatch;
use crate::errors::ApiError;
use crate::services::timer::{Scheduler, TimerId};

use super::types::SearchRequest;

/// Search-as-you-type selector state
///
/// Keeps the input text, the last accepted results and the committed
/// selection consistent: a selection only survives while the input shows
/// its name.
pub struct SearchSelector<S: Scheduler> {
    config: SearchConfig,
    scheduler: S,
    query: String,
    /// `None` until a search for the current text has completed
    results: Option<Vec<EntityMatch>>,
    selected: Option<EntityMatch>,
    dropdown_open: bool,
    searching: bool,
    debounce: Option<TimerId>,
    next_seq: u64,
    /// Sequence number of the only response that may still be applied
    outstanding: Option<u64>,
}

impl<S: Scheduler> SearchSelector<S> {
    /// Create an empty selector
    pub fn new(config: SearchConfig, scheduler: S) -> Self {
        Self {
            config,
            scheduler,
            query: String::new(),
            results: None,
            selected: None,
            dropdown_open: false,
            searching: false,
            debounce: None,
            next_seq: 0,
            outstanding: None,
        }
    }

    /// Handle a change of the input text
    ///
    /// Short input clears results and cancels any pending search; longer
    /// input restarts the debounce timer.
    pub fn input(&mut self, raw: impl Into<String>) {
        self.query = raw.into();
        if self
            .selected
            .as_ref()
            .is_some_and(|selected| selected.name != self.query)
        {
            self.selected = None;
        }

        self.cancel_debounce();

        let too_short = self.query.chars().count() < self.config.min_query_length
            || self.query.trim().is_empty();
        if too_short {
            self.results = None;
            self.dropdown_open = false;
            self.searching = false;
            self.outstanding = None;
            return;
        }

        self.debounce = Some(self.scheduler.schedule(self.config.debounce()));
    }

    /// Handle a fired timer; returns the request to issue when it was the
    /// current debounce timer
    pub fn on_timer(&mut self, id: TimerId) -> Option<SearchRequest> {
        if self.debounce != Some(id) {
            return None;
        }
        self.debounce = None;

        let query = self.query.trim().to_string();
        if query.is_empty() {
            return None;
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        self.outstanding = Some(seq);
        self.searching = true;

        debug!(seq = seq, query = %query, event = "search_issued", "Issuing entity search");
        Some(SearchRequest {
            seq,
            query,
            raw_query: self.query.clone(),
            limit: self.config.result_limit,
        })
    }

    /// Apply the outcome of a request; returns false when it was stale
    ///
    /// Failures degrade to an empty result list and are only logged.
    pub fn apply_response(
        &mut self,
        request: &SearchRequest,
        outcome: Result<Vec<EntityMatch>, ApiError>,
    ) -> bool {
        if self.outstanding != Some(request.seq) || request.raw_query != self.query {
            debug!(
                seq = request.seq,
                query = %request.query,
                event = "search_stale",
                "Discarding response for superseded query"
            );
            return false;
        }

        self.outstanding = None;
        self.searching = false;
        self.dropdown_open = true;

        match outcome {
            Ok(matches) => {
                debug!(seq = request.seq, count = matches.len(), "Search results applied");
                self.results = Some(matches);
            }
            Err(err) => {
                warn!(
                    seq = request.seq,
                    query = %request.query,
                    error = %err,
                    event = "search_failed",
                    "Entity search failed, showing no results"
                );
                self.results = Some(Vec::new());
            }
        }
        true
    }

    /// Commit the result at `index`
    ///
    /// The input takes the match's name and the result list is dropped so
    /// stale matches cannot be chosen again.
    pub fn select(&mut self, index: usize) -> Option<EntityMatch> {
        let chosen = self.results.as_ref()?.get(index)?.clone();

        self.cancel_debounce();
        self.query = chosen.name.clone();
        self.selected = Some(chosen.clone());
        self.results = None;
        self.dropdown_open = false;
        self.searching = false;
        self.outstanding = None;

        debug!(id = chosen.id, entity_type = %chosen.entity_type, "Entity selected");
        Some(chosen)
    }

    /// Reset text, selection and results together
    pub fn clear(&mut self) {
        self.cancel_debounce();
        self.query.clear();
        self.selected = None;
        self.results = None;
        self.dropdown_open = false;
        self.searching = false;
        self.outstanding = None;
    }

    /// Close the dropdown after an outside pointer interaction
    pub fn dismiss(&mut self) {
        self.dropdown_open = false;
    }

    /// Cancel pending work before the widget goes away
    pub fn teardown(&mut self) {
        self.cancel_debounce();
        self.outstanding = None;
        self.searching = false;
    }

    fn cancel_debounce(&mut self) {
        if let Some(id) = self.debounce.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Current input text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results for the current text; `None` when not searched yet
    pub fn results(&self) -> Option<&[EntityMatch]> {
        self.results.as_deref()
    }

    /// Committed selection
    pub fn selected(&self) -> Option<&EntityMatch> {
        self.selected.as_ref()
    }

    /// Whether a request for the current text is outstanding
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Whether the dropdown should be shown
    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Whether a debounce timer is pending
    pub fn has_pending_debounce(&self) -> bool {
        self.debounce.is_some()
    }

    /// Whether surrounding submit controls should wait
    pub fn is_busy(&self) -> bool {
        self.searching || self.debounce.is_some()
    }

    /// Active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

//! Types exchanged between the search controller, session and host

use crate::domain::entities::entity_match::EntityMatch;

/// A search the controller wants issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Sequence number; only the latest issued request is accepted
    pub seq: u64,
    /// Trimmed query sent to the server
    pub query: String,
    /// Raw input text that produced this request
    pub raw_query: String,
    /// Maximum number of matches
    pub limit: u32,
}

/// UI events fed into a search session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The input text changed
    Input(String),
    /// The result at this index was chosen
    Select(usize),
    /// The clear button was pressed
    Clear,
    /// A pointer interaction happened outside the widget
    Dismiss,
}

/// Progress reported by a search session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchUpdate {
    /// The debounce elapsed and a request was issued
    Searching { query: String },
    /// Results were applied for the current query
    Results { query: String, matches: Vec<EntityMatch> },
    /// A response arrived for a superseded query and was discarded
    Stale { query: String },
}

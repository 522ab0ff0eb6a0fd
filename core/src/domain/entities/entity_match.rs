//! Entity match returned by the remote entity search.

use serde::{Deserialize, Serialize};

/// Kind of organisation an entity match refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// A registered company
    Company,
    /// A bank
    Bank,
    /// An insurance company
    Insurance,
}

impl EntityType {
    /// Wire name of the entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Company => "company",
            EntityType::Bank => "bank",
            EntityType::Insurance => "insurance",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "company" => Ok(EntityType::Company),
            "bank" => Ok(EntityType::Bank),
            "insurance" => Ok(EntityType::Insurance),
            other => Err(format!("Unknown entity type: {}", other)),
        }
    }
}

/// A search result identifying a company, bank or insurance entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMatch {
    /// Server-side identifier
    pub id: i64,

    /// Kind of entity
    #[serde(rename = "type")]
    pub entity_type: EntityType,

    /// Display name; not unique across entities
    pub name: String,

    /// Abbreviated name (e.g. "GCB" for GCB Bank PLC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

impl EntityMatch {
    /// Create a new entity match without a short name
    pub fn new(id: i64, entity_type: EntityType, name: impl Into<String>) -> Self {
        Self {
            id,
            entity_type,
            name: name.into(),
            short_name: None,
        }
    }

    /// Attach a short name
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    /// Label for dropdown rows, e.g. "GCB Bank PLC (GCB)"
    pub fn label(&self) -> String {
        match self.short_name.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(short) => format!("{} ({})", self.name, short),
            None => self.name.clone(),
        }
    }
}

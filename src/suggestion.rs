//! Suggestion records returned by the entity endpoint
//!
//! The endpoint answers with a JSON array of objects carrying at least `id`
//! and `name`. Any other fields are kept as received so a suggestion can be
//! written back out unchanged.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One candidate entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Identifier, unique within one response
    pub id: Value,
    /// Display name
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Shared handle to a received suggestion
///
/// The handle is the suggestion's identity: two handles are the same
/// suggestion only if they point at the same allocation.
pub type SuggestionRef = Arc<Suggestion>;

impl Suggestion {
    pub fn new(id: impl Into<Value>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Identifier as shown to the user; strings are not quoted
    pub fn key(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Decode a response body into suggestions, keeping the service's order
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;

//! Suggestion lookups
//!
//! The UI thread sends one [`LookupRequest`] per non-empty query. A worker
//! thread runs each request as an independent task and reports back with a
//! [`LookupResponse`]. Responses arrive in completion order, not request
//! order, and carry no sequencing token.

mod client;
mod worker;

pub use client::{FetchError, SuggestionClient};
pub use worker::spawn_worker;

use crate::suggestion::Suggestion;

/// Request sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Query text, substituted raw into the endpoint path
    pub term: String,
}

/// Result reported by the lookup worker
#[derive(Debug)]
pub enum LookupResponse {
    /// The endpoint answered with a decodable suggestion array
    Suggestions {
        term: String,
        suggestions: Vec<Suggestion>,
    },
    /// Network error, non-success status, or undecodable body
    Failed { term: String, error: FetchError },
}

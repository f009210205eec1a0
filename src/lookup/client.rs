//! HTTP client for the entity suggestion endpoint

use reqwest::Url;
use thiserror::Error;

use crate::error::SearchError;
use crate::suggestion::{Suggestion, parse_suggestions};

/// Errors that can occur during a suggestion lookup
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned status {code}")]
    Status { code: u16 },

    /// Body was not a suggestion array
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for `GET {base_url}/{term}`
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    client: reqwest::Client,
    base_url: String,
}

impl SuggestionClient {
    /// Create a client for the given base URL
    ///
    /// Fails if the URL does not parse or is not http(s).
    pub fn new(base_url: impl Into<String>) -> Result<Self, SearchError> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url).map_err(|e| SearchError::InvalidEndpoint {
            url: base_url.clone(),
            message: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SearchError::InvalidEndpoint {
                url: base_url,
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the lookup URL, with the term placed unescaped in the last segment
    pub fn url_for(&self, term: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), term)
    }

    /// Fetch suggestions for `term`
    pub async fn fetch(&self, term: &str) -> Result<Vec<Suggestion>, FetchError> {
        let response = self
            .client
            .get(self.url_for(term))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_suggestions(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;

// Configuration type definitions

use serde::Deserialize;

/// Suggestion endpoint used when neither the config nor the CLI names one
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/entity";

pub const DEFAULT_MAX_VISIBLE_SUGGESTIONS: usize = 8;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_visible_suggestions() -> usize {
    DEFAULT_MAX_VISIBLE_SUGGESTIONS
}

/// Remote suggestion service section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    /// Base URL; the query term is appended as the last path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            base_url: default_base_url(),
        }
    }
}

/// Display section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    /// Rows shown in the suggestion dropdown before it scrolls
    #[serde(default = "default_max_visible_suggestions")]
    pub max_visible_suggestions: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            max_visible_suggestions: default_max_visible_suggestions(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

use std::path::PathBuf;

use thiserror::Error;

/// Startup errors for entity-search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid endpoint URL '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

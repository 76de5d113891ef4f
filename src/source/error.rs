//! Catalog source error types

use thiserror::Error;

/// Errors that can occur when fetching from the catalog API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Resource does not exist upstream (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failure or unexpected HTTP status
    #[error("Network failure: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("Decode failure: {0}")]
    Decode(String),
}

impl SourceError {
    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::NotFound(_) => "not_found",
            SourceError::Network(_) => "network",
            SourceError::Decode(_) => "decode",
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

/// Result type alias for source operations
pub type SourceResult<T> = Result<T, SourceError>;

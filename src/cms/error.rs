//! Fetch error types.

use thiserror::Error;

/// Errors raised while querying the content store
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API Error: {0}")]
    Status(u16),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

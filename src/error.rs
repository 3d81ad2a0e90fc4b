//! Error types for the dashboard gateway layer.
//!
//! Uses thiserror for ergonomic error definitions.
//! All errors are non-panicking; the gateways fold most of them into
//! degraded-but-functional values at the boundary.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Gateway-layer errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network unreachable, connection reset, transport timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status from the backend
    #[error("Backend returned HTTP {status}")]
    Http { status: u16 },

    /// Response body is not valid JSON of the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Umbrella surfaced to the UI when a credential save fails
    #[error("Credential save failed: {0}")]
    SaveFailed(#[source] Box<Error>),
}

impl Error {
    /// Wrap any underlying failure as the save-time umbrella error.
    pub(crate) fn into_save_failed(self) -> Self {
        Error::SaveFailed(Box::new(self))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

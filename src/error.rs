//! Error types
//!
//! Only translation loading produces error values. They never escape the
//! loader: it logs them and falls back.

use thiserror::Error;

/// Why a locale document could not be turned into a translation table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request itself failed (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// The body was not a JSON object
    #[error("invalid locale document: {0}")]
    Parse(String),
    /// No browser window to fetch from
    #[error("no window available")]
    NoWindow,
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

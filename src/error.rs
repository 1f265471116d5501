//! Error types
//!
//! Every failure in the library surfaces as an [`Error`]. Nothing is retried
//! or swallowed; absence of an optional relation is a value, not an error.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Library error.
#[derive(Debug, Error)]
pub enum Error {
    /// Base endpoint did not start with `http`/`https`.
    #[error("endpoint must start with http or https: {0}")]
    InvalidEndpoint(String),

    /// Network failure before a status code was observed (DNS, refused
    /// connection, malformed request, body read failure).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange completed but the status is outside the accepted set for
    /// the verb.
    #[error("{status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// JSON did not match the expected resource shape.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(#[from] serde_json::Error),

    /// A relation accessor was called on a resource with no transport attached.
    #[error("resource '{id}' has no transport attached")]
    DetachedEntity { id: String },

    /// The request was refused locally and never sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// HTTP status of a rejected request, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

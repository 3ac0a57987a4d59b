//! Errors returned by the TMDB client.

use sources::{ListKind, SourceFailure};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The API answered with a non-success status
    #[error("TMDB API error ({status}): {message}")]
    Http { status: u16, message: String },

    /// The request never got an answer (connect, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body did not match the expected shape
    #[error("Failed to decode response at `{path}`: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Client configuration error: {0}")]
    Config(String),
}

impl FetchError {
    /// True for failures worth retrying: transport problems, rate limiting
    /// and server-side errors.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Http { status, .. } => *status == 429 || *status >= 500,
            FetchError::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            FetchError::Decode { .. } | FetchError::Config(_) => false,
        }
    }

    /// HTTP status, if the API answered
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Record this error as the failure of one movie list
    pub fn to_failure(&self, kind: ListKind) -> SourceFailure {
        let message = match self {
            FetchError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        };
        SourceFailure {
            kind,
            status: self.status(),
            message,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

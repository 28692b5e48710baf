//! Error types for gateway requests.

use thiserror::Error;

/// Failure of a single gateway call.
///
/// Every failure is terminal for that call: the client logs one diagnostic
/// line and propagates the error unchanged. The caller decides how to react.
#[derive(Debug, Error)]
pub enum Error {
    /// The gateway answered with a non-2xx status.
    #[error("gateway error: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// The request never completed or the response body could not be decoded
    /// as JSON (connection refused, DNS failure, malformed body).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Numeric HTTP status for [`Error::Http`], if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Transport(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

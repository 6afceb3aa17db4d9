//! Backend failure types.

use thiserror::Error;

/// Why a generation call did not produce a usable reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("backend disabled by configuration")]
    Disabled,

    #[error("backend timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend returned HTTP {0}")]
    Status(u16),

    #[error("malformed backend payload: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Malformed(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Convenience alias for backend results.
pub type BackendResult<T> = Result<T, BackendError>;

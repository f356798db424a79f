//! Error types for imgfetch core

use thiserror::Error;

/// Errors that can stop a single fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout, invalid URL or a non-2xx status
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Check if this error came from the network side
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    /// HTTP status that caused the failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            FetchError::Io(_) => None,
        }
    }
}

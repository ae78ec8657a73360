//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`; the CLI uses
//! `anyhow` for convenient propagation. This module provides the top-level
//! [`Error`] that command handlers return before they reach `anyhow`.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure from an upstream service (ListenBrainz, MusicBrainz, Cover Art Archive)
    #[error("Upstream error: {0}")]
    Upstream(#[from] crate::brainz::UpstreamError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Missing or rejected credentials
    #[error("{0}")]
    Auth(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an auth error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }
}

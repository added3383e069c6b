//! Unified error handling for the mock trading bot
//!
//! A single error type replaces Box<dyn Error> throughout the application.
//! Note that most runtime failures are deliberately non-fatal: snapshot load
//! errors fall back to defaults and notification errors are logged and
//! swallowed, so this type mostly surfaces at startup.

use crate::config::ConfigError;

/// Main error type for the mock trading bot
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Snapshot IO error: {0}")]
    SnapshotIo(#[from] std::io::Error),

    #[error("Snapshot encoding error: {0}")]
    SnapshotEncode(#[from] serde_json::Error),

    #[error("Notification delivery error: {0}")]
    Notify(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BotError {
    /// Error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            BotError::Config(_) => "config",
            BotError::SnapshotIo(_) | BotError::SnapshotEncode(_) => "snapshot",
            BotError::Notify(_) => "notify",
            BotError::Server(_) => "server",
            BotError::Internal(_) => "internal",
        }
    }

    /// Whether the operation that produced this error can simply be retried
    /// on the next loop iteration
    pub fn is_transient(&self) -> bool {
        matches!(self, BotError::Notify(_) | BotError::SnapshotIo(_))
    }
}

impl From<String> for BotError {
    fn from(msg: String) -> Self {
        BotError::Internal(msg)
    }
}

impl From<&str> for BotError {
    fn from(msg: &str) -> Self {
        BotError::Internal(msg.to_string())
    }
}

/// Result type alias using BotError
pub type BotResult<T> = Result<T, BotError>;

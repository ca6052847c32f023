//! Error types
//!
//! Only setup can fail. Once the frame loop is running every step is infallible.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Entity layout broke a structural rule (missing or misplaced player)
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// The host could not provide a sprite
    #[error("failed to load resource '{path}': {reason}")]
    ResourceLoadFailure { path: String, reason: String },

    /// Settings were unreadable or out of range
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err.to_string())
    }
}

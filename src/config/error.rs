//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when building or loading a trainer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Quarter-turn duration must be greater than zero")]
    ZeroTurnDuration,

    #[error("Scramble length {length} exceeds the maximum of {max}")]
    ScrambleTooLong { length: usize, max: usize },

    /// JSON input could not be read
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

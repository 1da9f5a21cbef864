//! Trainer configuration.
//!
//! Configuration is a plain serde value built either through
//! [`TrainerConfigBuilder`] or loaded from JSON. Both paths run the same
//! validation.
//!
//! # Example
//!
//! ```rust
//! use cube_trainer::config::TrainerConfigBuilder;
//! use std::time::Duration;
//!
//! let config = TrainerConfigBuilder::new()
//!     .quarter_turn(Duration::from_millis(250))
//!     .scramble_length(25)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.scramble_length, 25);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod error;

pub use error::ConfigError;

/// Time a quarter-turn animation takes by default.
pub const DEFAULT_QUARTER_TURN: Duration = Duration::from_millis(500);

/// Moves in a trainer scramble by default.
pub const DEFAULT_TRAINER_SCRAMBLE_LENGTH: usize = 15;

/// Upper bound on configured scramble length.
pub const MAX_SCRAMBLE_LENGTH: usize = 1000;

/// Settings for a [`Trainer`](crate::trainer::Trainer).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// How long a 90° turn animation takes
    #[serde(with = "millis")]
    pub quarter_turn: Duration,

    /// Moves generated by `scramble`
    pub scramble_length: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            quarter_turn: DEFAULT_QUARTER_TURN,
            scramble_length: DEFAULT_TRAINER_SCRAMBLE_LENGTH,
        }
    }
}

impl TrainerConfig {
    /// Parse a JSON document, filling missing fields with defaults.
    ///
    /// `quarter_turn` is given in milliseconds.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration against the trainer's limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quarter_turn.is_zero() {
            return Err(ConfigError::ZeroTurnDuration);
        }
        if self.scramble_length > MAX_SCRAMBLE_LENGTH {
            return Err(ConfigError::ScrambleTooLong {
                length: self.scramble_length,
                max: MAX_SCRAMBLE_LENGTH,
            });
        }
        Ok(())
    }
}

/// Builder for [`TrainerConfig`]
#[derive(Clone, Debug, Default)]
pub struct TrainerConfigBuilder {
    config: TrainerConfig,
}

impl TrainerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quarter-turn animation duration
    pub fn quarter_turn(mut self, duration: Duration) -> Self {
        self.config.quarter_turn = duration;
        self
    }

    /// Set the scramble length
    pub fn scramble_length(mut self, length: usize) -> Self {
        self.config.scramble_length = length;
        self
    }

    /// Build the configuration, validating it
    pub fn build(self) -> Result<TrainerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

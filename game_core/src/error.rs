//! Error types for configuration loading and pool bookkeeping.
//!
//! The simulation itself never fails: a full photon pool is a silent no-op and
//! the asteroid pool is refilled every tick. Errors only surface at the edges,
//! when a host hands the core a bad configuration or a bad slot index.

use std::fmt;

/// Top-level error enum for the Asteroids core.
#[derive(Debug)]
pub enum GameError {
    /// The TOML document could not be parsed into a [`crate::Config`].
    ConfigParse(toml::de::Error),

    /// A configuration value is outside its usable range.
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// A pool slot index past the pool's capacity.
    InvalidSlot {
        /// Index that was requested.
        index: usize,
        /// Capacity of the pool.
        capacity: usize,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigParse(err) => write!(f, "failed to parse config: {}", err),
            GameError::InvalidConfig { field, expected } => {
                write!(f, "config field '{}' must be {}", field, expected)
            }
            GameError::InvalidSlot { index, capacity } => write!(
                f,
                "pool slot {} is out of range (capacity {})",
                index, capacity
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigParse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for GameError {
    fn from(err: toml::de::Error) -> Self {
        GameError::ConfigParse(err)
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_slot_message() {
        let err = GameError::InvalidSlot {
            index: 9,
            capacity: 8,
        };
        assert_eq!(err.to_string(), "pool slot 9 is out of range (capacity 8)");
    }

    #[test]
    fn test_invalid_config_message() {
        let err = GameError::InvalidConfig {
            field: "photon_speed",
            expected: "> 0",
        };
        assert!(err.to_string().contains("photon_speed"));
    }
}

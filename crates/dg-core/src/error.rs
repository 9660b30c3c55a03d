//! Error types for configuration and generation

use thiserror::Error;

/// Configuration errors, raised eagerly when a generator is built or a
/// configuration file is loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dungeon size must be positive in both dimensions, got {width}x{height}")]
    NonPositiveDungeon { width: i32, height: i32 },
    #[error("dungeon size {width}x{height} has more cells than can be counted")]
    DungeonTooLarge { width: i32, height: i32 },

    #[error("room area bounds must be positive, got min {min} and max {max}")]
    NonPositiveArea { min: i32, max: i32 },

    #[error("minimum room area {min} exceeds maximum room area {max}")]
    MinExceedsMax { min: i32, max: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that abort a generation run
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("cannot place a room in a {width}x{height} area: both sides must be at least 3")]
    InvalidBounds { width: i32, height: i32 },

    #[error("generator was left unusable by an earlier failed run")]
    Aborted,
}

//! Generator configuration
//!
//! Defaults match the stock layout: a 50x50 dungeon with room areas
//! between 5x5 and 20x20.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dungeon::Point2d;
use crate::error::ConfigError;

/// Default dungeon width and height
pub const DEFAULT_DUNGEON_SIDE: i32 = 50;

/// Default minimum room area
pub const DEFAULT_MIN_ROOM_AREA: i32 = 5 * 5;

/// Default maximum room area
pub const DEFAULT_MAX_ROOM_AREA: i32 = 20 * 20;

/// How a drawn room size is checked against the area bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomAreaPolicy {
    /// Resample only while the area is both above the maximum and below the
    /// minimum. With `min <= max` this never holds, so the first draw wins.
    #[default]
    FirstDraw,
    /// Resample while the area is above the maximum or below the minimum,
    /// keeping the last draw once the attempt limit is reached.
    Bounded,
}

/// Order in which free areas leave the worklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorklistOrder {
    /// Front of the queue first
    #[default]
    Fifo,
    /// Largest area first, earliest queued on ties
    LargestFirst,
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid extents (width, height)
    pub dungeon_size: Point2d,
    /// Free areas must be strictly larger than this to receive a room
    pub min_room_area: i32,
    /// Upper room area bound, only enforced by [`RoomAreaPolicy::Bounded`]
    pub max_room_area: i32,
    pub room_area_policy: RoomAreaPolicy,
    pub worklist_order: WorklistOrder,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dungeon_size: Point2d::new(DEFAULT_DUNGEON_SIDE, DEFAULT_DUNGEON_SIDE),
            min_room_area: DEFAULT_MIN_ROOM_AREA,
            max_room_area: DEFAULT_MAX_ROOM_AREA,
            room_area_policy: RoomAreaPolicy::default(),
            worklist_order: WorklistOrder::default(),
        }
    }
}

impl GeneratorConfig {
    /// Configuration with the given size and area bounds, default policies
    pub fn new(dungeon_size: Point2d, min_room_area: i32, max_room_area: i32) -> Self {
        Self {
            dungeon_size,
            min_room_area,
            max_room_area,
            ..Self::default()
        }
    }

    /// Check the configuration invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dungeon_size.x <= 0 || self.dungeon_size.y <= 0 {
            return Err(ConfigError::NonPositiveDungeon {
                width: self.dungeon_size.x,
                height: self.dungeon_size.y,
            });
        }
        if self.dungeon_size.x.checked_mul(self.dungeon_size.y).is_none() {
            return Err(ConfigError::DungeonTooLarge {
                width: self.dungeon_size.x,
                height: self.dungeon_size.y,
            });
        }
        if self.min_room_area <= 0 || self.max_room_area <= 0 {
            return Err(ConfigError::NonPositiveArea {
                min: self.min_room_area,
                max: self.max_room_area,
            });
        }
        if self.min_room_area > self.max_room_area {
            return Err(ConfigError::MinExceedsMax {
                min: self.min_room_area,
                max: self.max_room_area,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

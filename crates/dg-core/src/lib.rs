//! dg-core: room-carving dungeon layout generator
//!
//! Recursively partitions a rectangular area into free regions, places a
//! randomly sized room in each viable region and rasterizes the result into
//! a grid of typed cells.
//!
//! This crate performs no output I/O. Rendering produces plain text that the
//! caller is responsible for persisting or displaying.

pub mod config;
pub mod dungeon;
pub mod error;

mod rng;

pub use config::{GeneratorConfig, RoomAreaPolicy, WorklistOrder};
pub use dungeon::{CellKind, Corridor, Generator, GenerationPhase, Grid, Point2d, Rect, RoomSpec};
pub use error::{ConfigError, GenerationError};
pub use rng::DungeonRng;

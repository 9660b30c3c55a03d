//! Dungeon layout
//!
//! Contains the rectangle geometry, the cell grid, rooms and the generator
//! that ties them together.

mod cell;
mod corridor;
mod generation;
mod grid;
mod point;
mod rect;
mod room;

pub use cell::CellKind;
pub use corridor::Corridor;
pub use generation::{GenerationPhase, Generator};
pub use grid::Grid;
pub use point::Point2d;
pub use rect::Rect;
pub use room::{MAX_SIZE_ATTEMPTS, MIN_ROOM_SIDE, RoomSpec};

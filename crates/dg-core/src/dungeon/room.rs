//! Rooms and random room placement

use log::{trace, warn};

use crate::config::RoomAreaPolicy;
use crate::error::GenerationError;
use crate::rng::DungeonRng;

use super::{Corridor, Rect};

/// Smallest room side, walls included
pub const MIN_ROOM_SIDE: i32 = 3;

/// Size draws attempted before the last draw is kept
pub const MAX_SIZE_ATTEMPTS: u32 = 1000;

/// A placed rectangular room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSpec {
    /// Cells covered by the room, walls included
    pub bounds: Rect,
    /// Free area the room was carved from
    pub source: Rect,
    /// Always empty: corridors are not carved
    pub corridors: Vec<Corridor>,
}

impl RoomSpec {
    /// A room occupying exactly `bounds`
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            source: bounds,
            corridors: Vec::new(),
        }
    }

    /// Place a randomly sized room inside `area`
    ///
    /// Width and height are drawn from `[3, side)`; a side of exactly 3
    /// yields a room of side 3. The room is then positioned uniformly so
    /// that it fits inside `area`.
    pub fn random(
        area: &Rect,
        min_room_area: i32,
        max_room_area: i32,
        policy: RoomAreaPolicy,
        rng: &mut DungeonRng,
    ) -> Result<Self, GenerationError> {
        let (max_width, max_height) = (area.width(), area.height());
        if max_width < MIN_ROOM_SIDE || max_height < MIN_ROOM_SIDE {
            return Err(GenerationError::InvalidBounds {
                width: max_width,
                height: max_height,
            });
        }

        let mut attempts = 0;
        let (width, height) = loop {
            let w = rng.range(MIN_ROOM_SIDE, max_width);
            let h = rng.range(MIN_ROOM_SIDE, max_height);
            attempts += 1;

            let room_area = w * h;
            let rejected = match policy {
                RoomAreaPolicy::FirstDraw => room_area > max_room_area && room_area < min_room_area,
                RoomAreaPolicy::Bounded => room_area > max_room_area || room_area < min_room_area,
            };
            if !rejected {
                break (w, h);
            }
            if attempts >= MAX_SIZE_ATTEMPTS {
                warn!(
                    "no room size in {area} fit area bounds [{min_room_area}, {max_room_area}] \
                     after {attempts} draws, keeping {w}x{h}"
                );
                break (w, h);
            }
        };

        let x = rng.range(area.x(), area.x() + max_width - width);
        let y = rng.range(area.y(), area.y() + max_height - height);
        let bounds = Rect::new(x, y, width, height);
        trace!("room {bounds} drawn in {area} after {attempts} size draw(s)");

        Ok(Self {
            bounds,
            source: *area,
            corridors: Vec::new(),
        })
    }
}

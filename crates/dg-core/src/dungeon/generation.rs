//! Dungeon generation
//!
//! Carves rooms out of a worklist of free rectangles. The worklist starts
//! with the whole dungeon; every placed room splits its free rectangle into
//! leftover strips, and the strips large enough for another room are queued
//! again. Generation stops when the worklist is empty or the next candidate
//! is too small.

use std::collections::VecDeque;
use std::fmt;

use log::{debug, info, trace};

use crate::config::{GeneratorConfig, WorklistOrder};
use crate::error::{ConfigError, GenerationError};
use crate::rng::DungeonRng;

use super::{Corridor, Grid, Point2d, Rect, RoomSpec};

/// Lifecycle of a [`Generator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    /// Built, `generate` not called yet
    Pending,
    /// Inside `generate`
    Generating,
    /// Worklist exhausted; the layout is final
    Done,
    /// A room placement failed; the layout is incomplete
    Failed,
}

/// Room-carving dungeon generator
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    grid: Grid,
    free_areas: VecDeque<Rect>,
    rooms: Vec<RoomSpec>,
    corridors: Vec<Corridor>,
    rng: DungeonRng,
    phase: GenerationPhase,
}

impl Generator {
    /// Create a generator with default policies
    pub fn new(
        dungeon_size: Point2d,
        min_room_area: i32,
        max_room_area: i32,
        rng: DungeonRng,
    ) -> Result<Self, ConfigError> {
        Self::with_config(GeneratorConfig::new(dungeon_size, min_room_area, max_room_area), rng)
    }

    /// Create a generator from a full configuration
    pub fn with_config(config: GeneratorConfig, rng: DungeonRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let size = config.dungeon_size;
        let mut free_areas = VecDeque::new();
        free_areas.push_back(Rect::new(0, 0, size.x, size.y));

        Ok(Self {
            grid: Grid::new(size),
            free_areas,
            rooms: Vec::new(),
            corridors: Vec::new(),
            rng,
            phase: GenerationPhase::Pending,
            config,
        })
    }

    /// Run the partition and placement loop to completion
    ///
    /// Calling this again on a finished generator does nothing. A failed
    /// room placement aborts the run and leaves the generator unusable.
    pub fn generate(&mut self) -> Result<(), GenerationError> {
        match self.phase {
            GenerationPhase::Done => return Ok(()),
            GenerationPhase::Failed => return Err(GenerationError::Aborted),
            GenerationPhase::Pending | GenerationPhase::Generating => {}
        }

        self.phase = GenerationPhase::Generating;
        debug!(
            "generating {}x{} dungeon, seed {}, room area [{}, {}], {:?} worklist",
            self.config.dungeon_size.x,
            self.config.dungeon_size.y,
            self.rng.seed(),
            self.config.min_room_area,
            self.config.max_room_area,
            self.config.worklist_order
        );

        while let Some(area) = self.next_area() {
            if let Err(err) = self.place_room(area) {
                self.phase = GenerationPhase::Failed;
                return Err(err);
            }
        }

        self.phase = GenerationPhase::Done;
        info!(
            "placed {} rooms, {} overlapping pair(s)",
            self.rooms.len(),
            self.overlapping_rooms().len()
        );
        Ok(())
    }

    /// Dequeue the next candidate if it is large enough for a room
    fn next_area(&mut self) -> Option<Rect> {
        let idx = match self.config.worklist_order {
            WorklistOrder::Fifo => 0,
            WorklistOrder::LargestFirst => {
                self.free_areas
                    .iter()
                    .enumerate()
                    .fold(0, |best, (i, r)| {
                        if r.cmp_area(&self.free_areas[best]).is_gt() { i } else { best }
                    })
            }
        };

        let candidate = self.free_areas.get(idx)?;
        if candidate.area() <= self.config.min_room_area {
            return None;
        }
        self.free_areas.remove(idx)
    }

    fn place_room(&mut self, area: Rect) -> Result<(), GenerationError> {
        let room = RoomSpec::random(
            &area,
            self.config.min_room_area,
            self.config.max_room_area,
            self.config.room_area_policy,
            &mut self.rng,
        )?;
        debug!("room #{} at {} in free area {}", self.rooms.len(), room.bounds, area);

        self.grid.stamp_room(&room);
        let leftovers = area.split(&room.bounds);
        self.rooms.push(room);

        for leftover in leftovers {
            if self.is_viable(&leftover) {
                trace!("queue leftover {leftover}");
                self.free_areas.push_back(leftover);
            } else {
                trace!("drop leftover {leftover}");
            }
        }
        Ok(())
    }

    fn is_viable(&self, area: &Rect) -> bool {
        area.area() > self.config.min_room_area && area.width() > 2 && area.height() > 2
    }

    /// Index pairs `(i, j)`, `i < j`, of rooms whose bounds intersect
    ///
    /// The leftover split lets the left and top strips overlap, so rooms
    /// carved from both may intersect.
    pub fn overlapping_rooms(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.rooms.iter().enumerate() {
            for (j, b) in self.rooms.iter().enumerate().skip(i + 1) {
                if a.bounds.intersects(&b.bounds) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }

    pub fn rooms(&self) -> &[RoomSpec] {
        &self.rooms
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Always empty: corridors are not carved
    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Free areas still queued
    pub fn free_areas(&self) -> impl Iterator<Item = &Rect> {
        self.free_areas.iter()
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

//! Rectangle geometry for room placement
//!
//! Tracks free space as axis-aligned rectangles. When a room is placed inside
//! a free rectangle, the rectangle is split into up to four leftover strips
//! around the room.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point2d;

/// An axis-aligned rectangle. The bottom-right corner is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point2d,
    pub size: Point2d,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            top_left: Point2d::new(x, y),
            size: Point2d::new(width, height),
        }
    }

    pub const fn from_parts(top_left: Point2d, size: Point2d) -> Self {
        Self { top_left, size }
    }

    pub fn x(&self) -> i32 {
        self.top_left.x
    }

    pub fn y(&self) -> i32 {
        self.top_left.y
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// The exclusive bottom-right corner
    pub fn bottom_right(&self) -> Point2d {
        self.top_left + self.size
    }

    pub fn area(&self) -> i32 {
        self.size.x * self.size.y
    }

    /// Compare two rectangles by area only
    pub fn cmp_area(&self, other: &Rect) -> Ordering {
        self.area().cmp(&other.area())
    }

    /// Check if this rectangle contains another
    pub fn contains(&self, other: &Rect) -> bool {
        let (br, other_br) = (self.bottom_right(), other.bottom_right());
        self.x() <= other.x() && self.y() <= other.y() && br.x >= other_br.x && br.y >= other_br.y
    }

    /// Check if a cell lies inside the rectangle
    pub fn contains_point(&self, p: Point2d) -> bool {
        let br = self.bottom_right();
        p.x >= self.x() && p.x < br.x && p.y >= self.y() && p.y < br.y
    }

    /// Check if this rectangle shares at least one cell with another
    pub fn intersects(&self, other: &Rect) -> bool {
        let (br, other_br) = (self.bottom_right(), other.bottom_right());
        self.x() < other_br.x && other.x() < br.x && self.y() < other_br.y && other.y() < br.y
    }

    /// Split this rectangle around an inner rectangle
    ///
    /// Produces, in order, the left, top, right and bottom leftover strips.
    /// Each strip is emitted only when the inner rectangle does not touch the
    /// matching edge. The left strip spans the full height and the top strip
    /// starts at the left edge, so those two may overlap; the strips are not
    /// an exact tiling of the remaining space.
    pub fn split(&self, inner: &Rect) -> Vec<Rect> {
        let mut leftovers = Vec::with_capacity(4);
        let br = self.bottom_right();
        let inner_br = inner.bottom_right();

        // Left strip
        if self.x() != inner.x() {
            leftovers.push(Rect::new(
                self.x(),
                self.y(),
                inner.x() - self.x(),
                self.height(),
            ));
        }

        // Top strip
        if self.y() != inner.y() {
            leftovers.push(Rect::new(
                self.x(),
                self.y(),
                (self.width() - (inner.x() - self.x())).abs(),
                (inner.y() - self.y()).abs(),
            ));
        }

        // Right strip
        if br.x != inner_br.x {
            leftovers.push(Rect::new(
                inner_br.x,
                inner.y(),
                (inner_br.x - br.x).abs(),
                (br.y - inner.y()).abs(),
            ));
        }

        // Bottom strip
        if br.y != inner_br.y {
            leftovers.push(Rect::new(
                inner.x(),
                inner_br.y,
                inner.width(),
                (br.y - inner_br.y).abs(),
            ));
        }

        leftovers
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {} {}", self.x(), self.y(), self.width(), self.height())
    }
}

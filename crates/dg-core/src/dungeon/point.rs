//! Integer coordinates and sizes

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A 2D integer pair, used both as a position and as a size
/// (width = `x`, height = `y`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point2d {
    pub x: i32,
    pub y: i32,
}

impl Point2d {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point2d {
    type Output = Point2d;

    fn add(self, rhs: Point2d) -> Point2d {
        Point2d::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Point2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

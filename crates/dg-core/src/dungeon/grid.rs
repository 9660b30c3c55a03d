//! Cell grid and text rendering

use std::fmt;

use super::{CellKind, Point2d, RoomSpec};

/// Fixed-size 2D cell buffer covering `[0, width) x [0, height)`
///
/// Coordinates are caller-guaranteed. Accessing a cell outside the grid is a
/// programming error and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: Point2d,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Create a grid filled with [`CellKind::Empty`]
    ///
    /// Negative extents are treated as zero.
    pub fn new(size: Point2d) -> Self {
        let size = Point2d::new(size.x.max(0), size.y.max(0));
        Self {
            size,
            cells: vec![CellKind::Empty; (size.x as usize) * (size.y as usize)],
        }
    }

    pub fn size(&self) -> Point2d {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            x >= 0 && x < self.size.x && y >= 0 && y < self.size.y,
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.size.x,
            self.size.y
        );
        (y as usize) * (self.size.x as usize) + x as usize
    }

    pub fn cell(&self, x: i32, y: i32) -> CellKind {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: i32, y: i32, kind: CellKind) {
        let idx = self.index(x, y);
        self.cells[idx] = kind;
    }

    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_empty()
    }

    /// Count the cells of a given kind
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Write a room into the grid: walls on the border, room cells inside
    pub fn stamp_room(&mut self, room: &RoomSpec) {
        let top_left = room.bounds.top_left;
        let bottom_right = room.bounds.bottom_right();

        for x in top_left.x..bottom_right.x {
            for y in top_left.y..bottom_right.y {
                let on_border = x == top_left.x
                    || x == bottom_right.x - 1
                    || y == top_left.y
                    || y == bottom_right.y - 1;
                let kind = if on_border { CellKind::Wall } else { CellKind::Room };
                self.set(x, y, kind);
            }
        }
    }

    /// Render the grid as text, one line per row, each row ending in `\n`
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.size.y as usize);
        let width = self.size.x as usize;
        for y in 0..self.size.y as usize {
            let row = &self.cells[y * width..(y + 1) * width];
            out.extend(row.iter().map(CellKind::symbol));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

//! Grid cell types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Cell type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellKind {
    Wall = 0,
    #[default]
    Empty = 1,
    /// Reserved for corridor carving, never written by the generator
    Floor = 2,
    Room = 3,
}

impl CellKind {
    /// Get the display character for this cell type
    pub const fn symbol(&self) -> char {
        match self {
            CellKind::Floor => '_',
            CellKind::Empty => ' ',
            CellKind::Room => '+',
            CellKind::Wall => '#',
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, CellKind::Empty)
    }
}

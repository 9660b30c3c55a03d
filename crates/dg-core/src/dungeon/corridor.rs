//! Corridor links between rooms
//!
//! Corridor carving is not implemented: the type exists so rooms and the
//! generator can carry corridor lists, which stay empty.

use serde::{Deserialize, Serialize};

/// A link between two rooms, by index into the generator's room list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Corridor {
    pub from: usize,
    pub to: usize,
}

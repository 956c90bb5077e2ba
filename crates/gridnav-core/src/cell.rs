//! The [`Cell`] type: one position of a grid and whether it can be crossed.

use std::fmt;

use crate::geom::Pos;

/// A single grid position together with its passability.
///
/// Equality and hashing cover the coordinates and the passable flag only.
/// Display state lives in a separate [`TagLayer`](crate::TagLayer), so
/// painting a cell never changes its identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Pos,
    pub passable: bool,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(pos: Pos, passable: bool) -> Self {
        Self { pos, passable }
    }

    /// Row coordinate.
    #[inline]
    pub const fn row(self) -> i32 {
        self.pos.row
    }

    /// Column coordinate.
    #[inline]
    pub const fn col(self) -> i32 {
        self.pos.col
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row:{}, col:{}", self.pos.row, self.pos.col)
    }
}

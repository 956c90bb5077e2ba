//! Error types for route search.

use gridnav_core::{Cell, Dims, Grid, Pos};
use thiserror::Error;

/// Why a search returned no route. Every variant is terminal for the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// An endpoint lies outside the grid.
    #[error("position {pos} is outside the {dims} grid")]
    OutOfBounds { pos: Pos, dims: Dims },

    /// An endpoint is a wall.
    #[error("endpoint {pos} is not passable")]
    InvalidEndpoint { pos: Pos },

    /// The frontier ran dry before the stop cell was reached.
    #[error("no path exists from {start} to {stop}")]
    NoPathExists { start: Pos, stop: Pos },

    /// The caller raised the abort flag.
    #[error("search cancelled")]
    Cancelled,

    /// The predecessor chain breaks before reaching the start cell.
    #[error("no predecessor recorded for {pos}")]
    NoPredecessor { pos: Pos },
}

/// Look up a cell, reporting a miss in search terms.
pub(crate) fn cell_at(grid: &Grid, pos: Pos) -> Result<Cell> {
    grid.cell_at(pos).map_err(|_| SearchError::OutOfBounds {
        pos,
        dims: grid.dims(),
    })
}

/// Result alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

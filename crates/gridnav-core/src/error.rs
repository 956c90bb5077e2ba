//! Error types for grid construction, lookup and grid files.

use thiserror::Error;

use crate::geom::{Dims, Pos};

/// Errors raised by [`Grid`](crate::Grid) and its import/export helpers.
#[derive(Debug, Error)]
pub enum GridError {
    /// A coordinate outside `[0, rows) × [0, cols)`.
    #[error("position {pos} is outside the {dims} grid")]
    OutOfBounds { pos: Pos, dims: Dims },

    /// A grid must have at least one row and one column.
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// Rows of a passability matrix have different lengths.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A generation parameter is outside its valid range.
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),

    /// A grid file could not be parsed.
    #[error("malformed grid file at line {line}: {reason}")]
    MalformedGridFile { line: usize, reason: String },

    /// Storage failure, passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GridError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedGridFile {
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

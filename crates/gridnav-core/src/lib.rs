//! **gridnav-core**: the grid model used by the gridnav route finders.
//!
//! This crate provides coordinates ([`Pos`], [`Dims`]), the [`Cell`] and
//! [`Grid`] types, seeded random generation ([`MapGen`], [`GenConfig`]),
//! the comma-separated grid file format, and the cosmetic [`TagLayer`] that
//! renderers paint while a search runs.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod gridfile;
pub mod mapgen;
pub mod tags;

pub use cell::Cell;
pub use error::{GridError, Result};
pub use geom::{Dims, Pos};
pub use grid::Grid;
pub use gridfile::{export_grid, parse_grid, read_grid, write_grid};
pub use mapgen::{DEFAULT_PASS_PROBABILITY, GenConfig, MapGen};
pub use tags::{Role, TagLayer};

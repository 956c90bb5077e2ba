//! Route search over [`gridnav_core::Grid`].
//!
//! This crate finds a route between two passable cells with one shared
//! traversal loop ([`traverse`]) and interchangeable frontier policies:
//!
//! - **Breadth-first** ([`Strategy::Bfs`], [`FifoFrontier`]): shortest route
//! - **Depth-first** ([`Strategy::Dfs`], [`LifoFrontier`]): some route, found deep first
//! - **A\*** ([`Strategy::AStar`], [`PriorityFrontier::astar`]): shortest route,
//!   guided by a [`Heuristic`]
//! - **Greedy best-first** ([`Strategy::Greedy`], [`PriorityFrontier::greedy`])
//!
//! Each call owns its frontier, explored marks and [`Predecessors`]; the grid
//! is only read. Progress is reported synchronously through an [`Observer`],
//! which may also abort the search.
//!
//! ```
//! use gridnav_core::Grid;
//! use gridnav_search::Strategy;
//!
//! let grid = Grid::filled(3, 3, true).unwrap();
//! let sol = Strategy::Bfs.search(&grid, (0, 0), (2, 2)).unwrap();
//! assert_eq!(sol.len(), 5);
//! ```

mod engine;
mod error;
mod frontier;
mod heuristic;
mod observe;
mod reconstruct;
mod strategy;

pub use engine::{Solution, traverse};
pub use error::{Result, SearchError};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier, Scoring};
pub use heuristic::{Heuristic, UnknownHeuristic, euclidean, manhattan};
pub use observe::{Observation, Observer, Recorder, Silent, WithAbort};
pub use reconstruct::{Predecessors, reconstruct};
pub use strategy::{Strategy, UnknownStrategy, search};

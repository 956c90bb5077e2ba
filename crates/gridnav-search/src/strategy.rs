//! The strategy-level search surface.

use std::fmt;
use std::str::FromStr;

use gridnav_core::{Grid, Pos};

use crate::engine::{Solution, traverse};
use crate::error::Result;
use crate::frontier::{FifoFrontier, LifoFrontier, PriorityFrontier};
use crate::heuristic::Heuristic;
use crate::observe::{Observer, Silent};

/// Which frontier ordering to search with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Breadth-first: shortest route on a uniform grid.
    Bfs,
    /// Depth-first: some route, explored deep before wide.
    Dfs,
    /// A*: shortest route, guided by the heuristic.
    AStar(Heuristic),
    /// Greedy best-first: some route, chasing the heuristic alone.
    Greedy(Heuristic),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::AStar(Heuristic::default())
    }
}

impl Strategy {
    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::AStar(_) => "astar",
            Strategy::Greedy(_) => "greedy",
        }
    }

    /// The heuristic, for informed strategies.
    pub const fn heuristic(self) -> Option<Heuristic> {
        match self {
            Strategy::AStar(h) | Strategy::Greedy(h) => Some(h),
            Strategy::Bfs | Strategy::Dfs => None,
        }
    }

    /// Replace the heuristic of an informed strategy. Uninformed strategies
    /// are returned unchanged.
    pub const fn with_heuristic(self, h: Heuristic) -> Self {
        match self {
            Strategy::AStar(_) => Strategy::AStar(h),
            Strategy::Greedy(_) => Strategy::Greedy(h),
            other => other,
        }
    }

    /// Whether the returned route is guaranteed to be a shortest one.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Strategy::Bfs | Strategy::AStar(_))
    }

    /// Search without observing.
    pub fn search(
        self,
        grid: &Grid,
        start: impl Into<Pos>,
        stop: impl Into<Pos>,
    ) -> Result<Solution> {
        self.search_with(grid, start, stop, &mut Silent)
    }

    /// Search, reporting each step to `observer`.
    pub fn search_with<O: Observer + ?Sized>(
        self,
        grid: &Grid,
        start: impl Into<Pos>,
        stop: impl Into<Pos>,
        observer: &mut O,
    ) -> Result<Solution> {
        let (start, stop) = (start.into(), stop.into());
        match self {
            Strategy::Bfs => traverse(grid, FifoFrontier::new(), start, stop, observer),
            Strategy::Dfs => traverse(grid, LifoFrontier::new(), start, stop, observer),
            Strategy::AStar(h) => {
                traverse(grid, PriorityFrontier::astar(stop, h), start, stop, observer)
            }
            Strategy::Greedy(h) => {
                traverse(grid, PriorityFrontier::greedy(stop, h), start, stop, observer)
            }
        }
    }
}

/// Search `grid` from `start` to `stop` with `strategy`.
pub fn search(
    grid: &Grid,
    strategy: Strategy,
    start: impl Into<Pos>,
    stop: impl Into<Pos>,
) -> Result<Solution> {
    strategy.search(grid, start, stop)
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.heuristic() {
            Some(h) => write!(f, "{} ({h})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?} (expected bfs, dfs, astar or greedy)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    /// Parses `bfs`, `dfs`, `astar` and `greedy`; informed strategies get the
    /// default heuristic.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            "astar" | "a*" => Ok(Strategy::AStar(Heuristic::default())),
            "greedy" | "best-first" => Ok(Strategy::Greedy(Heuristic::default())),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

//! The shared traversal loop.
//!
//! Every strategy runs through [`traverse`]; a [`Frontier`] decides which
//! discovered cell is explored next. A cell enters the frontier at most once
//! and is never queued again after it has been explored, so the loop ends
//! after at most `rows × cols` expansions.

use gridnav_core::{Cell, Grid, Pos, Role};
use log::{debug, trace};

use crate::error::{Result, SearchError, cell_at};
use crate::frontier::Frontier;
use crate::observe::{Observation, Observer};
use crate::reconstruct::{Predecessors, reconstruct};

/// A route and how much work it took to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Cells from start to stop, both included.
    pub path: Vec<Cell>,
    /// Number of cells removed from the frontier and explored.
    pub expanded: usize,
}

impl Solution {
    /// Number of cells on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false`: a path holds at least the start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of moves, one less than the number of cells.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Positions along the path.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Pos> + '_ {
        self.path.iter().map(|c| c.pos)
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mark {
    Unseen,
    Queued,
    Explored,
}

/// Search `grid` from `start` to `stop`, ordering exploration with
/// `frontier` and reporting every step to `observer`.
pub fn traverse<F, O>(
    grid: &Grid,
    frontier: F,
    start: Pos,
    stop: Pos,
    observer: &mut O,
) -> Result<Solution>
where
    F: Frontier,
    O: Observer + ?Sized,
{
    run(grid, frontier, start, stop, observer).map(|(solution, _)| solution)
}

pub(crate) fn run<F, O>(
    grid: &Grid,
    mut frontier: F,
    start: Pos,
    stop: Pos,
    observer: &mut O,
) -> Result<(Solution, Predecessors)>
where
    F: Frontier,
    O: Observer + ?Sized,
{
    let start_cell = cell_at(grid, start)?;
    let stop_cell = cell_at(grid, stop)?;
    for cell in [start_cell, stop_cell] {
        if !cell.passable {
            return Err(SearchError::InvalidEndpoint { pos: cell.pos });
        }
    }
    debug!("search {start} -> {stop} on {} grid", grid.dims());

    observer.observe(Observation::new(start, Role::Start));
    observer.observe(Observation::new(stop, Role::Stop));

    let dims = grid.dims();
    let mut marks = vec![Mark::Unseen; dims.len()];
    let mut cost = vec![0u32; dims.len()];
    let mut preds = Predecessors::new();
    let mut expanded = 0usize;

    let relaxes = frontier.relaxes();
    frontier.insert(start, 0);
    if let Some(si) = dims.index(start) {
        marks[si] = Mark::Queued;
    }

    loop {
        if observer.aborted() {
            debug!("search {start} -> {stop} cancelled after {expanded} expansions");
            return Err(SearchError::Cancelled);
        }
        let Some(curr) = frontier.remove_next() else {
            break;
        };
        let Some(ci) = dims.index(curr) else {
            continue;
        };
        // Stale entry left behind by a relaxation.
        if marks[ci] == Mark::Explored {
            continue;
        }
        marks[ci] = Mark::Explored;
        expanded += 1;
        trace!("explore {curr} (g = {})", cost[ci]);
        observer.observe(Observation::new(curr, Role::Explored));

        if curr == stop {
            let path = reconstruct(grid, start, stop, &preds)?;
            if path.len() > 2 {
                for cell in &path[1..path.len() - 1] {
                    observer.observe(Observation::new(cell.pos, Role::Solution));
                }
            }
            debug!(
                "search {start} -> {stop}: path of {} cells, {expanded} expanded",
                path.len()
            );
            return Ok((Solution { path, expanded }, preds));
        }

        let next_cost = cost[ci] + 1;
        for neighbor in grid.neighbors(Cell::new(curr, true)) {
            if !neighbor.passable {
                continue;
            }
            let Some(ni) = dims.index(neighbor.pos) else {
                continue;
            };
            match marks[ni] {
                Mark::Explored => {}
                Mark::Queued => {
                    if relaxes && next_cost < cost[ni] {
                        cost[ni] = next_cost;
                        preds.relink(neighbor.pos, curr);
                        frontier.insert(neighbor.pos, next_cost);
                    }
                }
                Mark::Unseen => {
                    marks[ni] = Mark::Queued;
                    cost[ni] = next_cost;
                    preds.record(neighbor.pos, curr);
                    frontier.insert(neighbor.pos, next_cost);
                    observer.observe(Observation::new(neighbor.pos, Role::Frontier));
                }
            }
        }
    }

    debug!("search {start} -> {stop}: frontier exhausted after {expanded} expansions");
    Err(SearchError::NoPathExists { start, stop })
}

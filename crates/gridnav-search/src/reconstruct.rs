//! Predecessor bookkeeping and path reconstruction.

use std::collections::HashMap;

use gridnav_core::{Cell, Grid, Pos};

use crate::error::{Result, SearchError, cell_at};

/// Maps each discovered cell to the cell it was reached from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predecessors {
    map: HashMap<Pos, Pos>,
}

impl Predecessors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `parent` as the predecessor of `child` unless one is already
    /// recorded. Returns whether the entry was added.
    pub fn record(&mut self, child: Pos, parent: Pos) -> bool {
        match self.map.entry(child) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(v) => {
                v.insert(parent);
                true
            }
        }
    }

    /// Replace the predecessor of a cell that a cheaper route reached.
    pub(crate) fn relink(&mut self, child: Pos, parent: Pos) {
        self.map.insert(child, parent);
    }

    /// The recorded predecessor of `child`.
    #[inline]
    pub fn get(&self, child: Pos) -> Option<Pos> {
        self.map.get(&child).copied()
    }

    #[inline]
    pub fn contains(&self, child: Pos) -> bool {
        self.map.contains_key(&child)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(Pos, Pos)> for Predecessors {
    /// Collect `(child, parent)` pairs; the first pair for a child wins.
    fn from_iter<I: IntoIterator<Item = (Pos, Pos)>>(iter: I) -> Self {
        let mut preds = Self::new();
        for (child, parent) in iter {
            preds.record(child, parent);
        }
        preds
    }
}

/// Rebuild the route from `start` to `stop` by walking predecessors back
/// from `stop`.
///
/// The result begins with `start` and ends with `stop`; it is `[start]`
/// when the two coincide. Fails with [`SearchError::NoPredecessor`] if the
/// chain breaks or loops before reaching `start`.
pub fn reconstruct(grid: &Grid, start: Pos, stop: Pos, preds: &Predecessors) -> Result<Vec<Cell>> {
    let mut path = vec![cell_at(grid, stop)?];
    let mut cur = stop;
    while cur != start {
        // A chain without cycles visits each recorded child at most once.
        if path.len() > preds.len() {
            return Err(SearchError::NoPredecessor { pos: cur });
        }
        cur = preds
            .get(cur)
            .ok_or(SearchError::NoPredecessor { pos: cur })?;
        path.push(cell_at(grid, cur)?);
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    fn open(rows: usize, cols: usize) -> Grid {
        Grid::filled(rows, cols, true).unwrap()
    }

    #[test]
    fn first_record_wins() {
        let mut preds = Predecessors::new();
        assert!(preds.record(p(0, 1), p(0, 0)));
        assert!(!preds.record(p(0, 1), p(1, 1)));
        assert_eq!(preds.get(p(0, 1)), Some(p(0, 0)));
        assert_eq!(preds.len(), 1);
    }

    #[test]
    fn walks_back_to_start() {
        let g = open(3, 3);
        let preds: Predecessors = [
            (p(0, 1), p(0, 0)),
            (p(0, 2), p(0, 1)),
            (p(1, 2), p(0, 2)),
            (p(1, 0), p(0, 0)),
        ]
        .into_iter()
        .collect();
        let path = reconstruct(&g, p(0, 0), p(1, 2), &preds).unwrap();
        let pos: Vec<_> = path.iter().map(|c| c.pos).collect();
        assert_eq!(pos, vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2)]);
    }

    #[test]
    fn start_equals_stop() {
        let g = open(2, 2);
        let path = reconstruct(&g, p(1, 1), p(1, 1), &Predecessors::new()).unwrap();
        assert_eq!(path, vec![Cell::new(p(1, 1), true)]);
    }

    #[test]
    fn self_loop_at_start_is_harmless() {
        let g = open(1, 3);
        let preds: Predecessors = [(p(0, 0), p(0, 0)), (p(0, 1), p(0, 0))].into_iter().collect();
        let path = reconstruct(&g, p(0, 0), p(0, 1), &preds).unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn missing_predecessor() {
        let g = open(2, 2);
        let err = reconstruct(&g, p(0, 0), p(1, 1), &Predecessors::new()).unwrap_err();
        assert_eq!(err, SearchError::NoPredecessor { pos: p(1, 1) });
    }

    #[test]
    fn cycle_is_detected() {
        let g = open(2, 2);
        let preds: Predecessors = [(p(1, 1), p(1, 0)), (p(1, 0), p(1, 1))].into_iter().collect();
        let err = reconstruct(&g, p(0, 0), p(1, 1), &preds).unwrap_err();
        assert!(matches!(err, SearchError::NoPredecessor { .. }));
    }

    #[test]
    fn stop_outside_grid() {
        let g = open(2, 2);
        let err = reconstruct(&g, p(0, 0), p(5, 0), &Predecessors::new()).unwrap_err();
        assert!(matches!(err, SearchError::OutOfBounds { .. }));
    }
}

//! The [`Grid`] type: a fixed-shape 2D array of [`Cell`]s.
//!
//! The shape is chosen at construction and never changes. Every position
//! inside the shape owns exactly one cell, stored row-major in a flat buffer.
//! Passability may be toggled between searches with
//! [`set_passable`](Grid::set_passable).

use crate::cell::Cell;
use crate::error::{GridError, Result};
use crate::geom::{Dims, Pos};

/// A `rows × cols` grid of passable / blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dims,
    open: Vec<bool>,
}

impl Grid {
    /// Create a grid where every cell has the same passability.
    pub fn filled(rows: usize, cols: usize, passable: bool) -> Result<Self> {
        let dims = checked_dims(rows, cols)?;
        Ok(Self {
            dims,
            open: vec![passable; dims.len()],
        })
    }

    /// Build a grid from a row-major passability matrix (`true` = passable).
    ///
    /// All rows must have the same, non-zero length.
    pub fn from_matrix<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, |r| r.as_ref().len());
        let dims = checked_dims(rows, cols)?;

        let mut open = Vec::with_capacity(dims.len());
        for (r, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            open.extend_from_slice(row);
        }
        Ok(Self { dims, open })
    }

    /// Build a grid by evaluating `f` at every position, row-major.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Pos) -> bool) -> Result<Self> {
        let dims = checked_dims(rows, cols)?;
        let open = dims.iter().map(&mut f).collect();
        Ok(Self { dims, open })
    }

    /// The grid shape.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows as usize
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.cols as usize
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.dims.contains(p)
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        self.dims.index(p)
    }

    /// The cell at `p`.
    pub fn cell_at(&self, p: impl Into<Pos>) -> Result<Cell> {
        let p = p.into();
        let idx = self.checked_index(p)?;
        Ok(Cell::new(p, self.open[idx]))
    }

    /// Whether the cell at `p` is passable. Out-of-bounds positions are not.
    #[inline]
    pub fn is_passable(&self, p: Pos) -> bool {
        self.index(p).is_some_and(|i| self.open[i])
    }

    /// Open or close the cell at `p`.
    pub fn set_passable(&mut self, p: impl Into<Pos>, passable: bool) -> Result<()> {
        let idx = self.checked_index(p.into())?;
        self.open[idx] = passable;
        Ok(())
    }

    /// In-bounds orthogonal neighbours of `cell` in the fixed order up,
    /// right, down, left. Passability is not filtered here.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.pos
            .neighbors_4()
            .into_iter()
            .filter_map(move |p| self.index(p).map(|i| Cell::new(p, self.open[i])))
    }

    /// Number of passable cells.
    pub fn count_passable(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.dims
            .iter()
            .zip(self.open.iter())
            .map(|(p, &o)| Cell::new(p, o))
    }

    /// Passability of one row, left to right. `None` if `row` is out of range.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows() {
            return None;
        }
        let cols = self.cols();
        Some(&self.open[row * cols..(row + 1) * cols])
    }

    fn checked_index(&self, p: Pos) -> Result<usize> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            dims: self.dims,
        })
    }
}

fn checked_dims(rows: usize, cols: usize) -> Result<Dims> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyGrid { rows, cols });
    }
    match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(r), Ok(c)) if r.checked_mul(c).is_some() => Ok(Dims::new(r, c)),
        _ => Err(GridError::InvalidConfig(format!(
            "grid of {rows}x{cols} cells is too large"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_matrix(&[
            [true, false, true],
            [true, true, true],
        ])
        .unwrap()
    }

    #[test]
    fn from_matrix_and_lookup() {
        let g = sample();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.cell_at((0, 1)).unwrap(), Cell::new(Pos::new(0, 1), false));
        assert!(g.is_passable(Pos::new(1, 2)));
        assert_eq!(g.count_passable(), 5);
    }

    #[test]
    fn cell_at_out_of_bounds() {
        let g = sample();
        for p in [Pos::new(2, 0), Pos::new(0, 3), Pos::new(-1, 0), Pos::new(0, -1)] {
            assert!(matches!(
                g.cell_at(p),
                Err(GridError::OutOfBounds { pos, .. }) if pos == p
            ));
        }
        assert!(!g.is_passable(Pos::new(5, 5)));
    }

    #[test]
    fn empty_and_ragged_rejected() {
        let empty: [[bool; 0]; 0] = [];
        assert!(matches!(
            Grid::from_matrix(&empty),
            Err(GridError::EmptyGrid { rows: 0, .. })
        ));
        assert!(matches!(
            Grid::filled(3, 0, true),
            Err(GridError::EmptyGrid { cols: 0, .. })
        ));
        let ragged = vec![vec![true, true], vec![true]];
        assert!(matches!(
            Grid::from_matrix(&ragged),
            Err(GridError::Ragged { row: 1, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn neighbors_order_and_bounds() {
        let g = Grid::filled(3, 3, true).unwrap();
        let centre = g.cell_at((1, 1)).unwrap();
        let ns: Vec<_> = g.neighbors(centre).map(|c| c.pos).collect();
        assert_eq!(
            ns,
            vec![Pos::new(0, 1), Pos::new(1, 2), Pos::new(2, 1), Pos::new(1, 0)]
        );

        let corner = g.cell_at((0, 0)).unwrap();
        let ns: Vec<_> = g.neighbors(corner).map(|c| c.pos).collect();
        assert_eq!(ns, vec![Pos::new(0, 1), Pos::new(1, 0)]);
    }

    #[test]
    fn neighbors_include_walls() {
        let g = sample();
        let c = g.cell_at((0, 0)).unwrap();
        let ns: Vec<_> = g.neighbors(c).collect();
        assert_eq!(ns[0], Cell::new(Pos::new(0, 1), false));
        assert_eq!(ns.len(), 2);
    }

    #[test]
    fn set_passable_toggles() {
        let mut g = sample();
        g.set_passable((0, 1), true).unwrap();
        assert!(g.is_passable(Pos::new(0, 1)));
        assert!(g.set_passable((9, 9), true).is_err());
    }

    #[test]
    fn cells_and_rows() {
        let g = sample();
        let cells: Vec<_> = g.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[4], Cell::new(Pos::new(1, 1), true));
        assert_eq!(g.row(0), Some(&[true, false, true][..]));
        assert_eq!(g.row(2), None);
    }

    #[test]
    fn from_fn_row_major() {
        let g = Grid::from_fn(2, 2, |p| p.row == p.col).unwrap();
        assert_eq!(g.row(0), Some(&[true, false][..]));
        assert_eq!(g.row(1), Some(&[false, true][..]));
    }
}

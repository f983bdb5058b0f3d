use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

use crate::CellOffset;

/// A `(row, col)` position on a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move by `(dr, dc)`, returning `None` if the result leaves a `rows x cols` grid.
    ///
    /// There is no wrapping: the grid edges are hard walls.
    pub fn offset(self, dr: CellOffset, dc: CellOffset, rows: usize, cols: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;

        (row < rows && col < cols).then_some(Coord { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Failed to allocate a {rows}x{cols} grid: {source}")]
    Allocation {
        rows: usize,
        cols: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Grid dimensions must be at least 1x1, got {rows}x{cols}")]
    ZeroSized { rows: usize, cols: usize },

    #[error("Row {row} has {got} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Coordinate {coord} is outside a {rows}x{cols} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
}

/// Anything that can hand out random cell states.
///
/// Every [`rand::Rng`] is a `RandomSource`, but tests can plug in their own.
pub trait RandomSource {
    fn next_boolean(&mut self) -> bool;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_boolean(&mut self) -> bool {
        self.random()
    }
}

/// A fixed size rectangle of alive/dead cells.
///
/// Cells live in a single row-major buffer. The dimensions are fixed at construction, there is no
/// way to resize a grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid where every cell is dead
    pub fn dead(rows: usize, cols: usize) -> Result<Self, GridError> {
        let mut cells = Self::alloc(rows, cols)?;
        cells.resize(rows * cols, false);

        Ok(Self { cells, rows, cols })
    }

    /// Create a grid whose cells are drawn, row by row, from `source`
    pub fn random<S>(rows: usize, cols: usize, source: &mut S) -> Result<Self, GridError>
    where
        S: RandomSource + ?Sized,
    {
        let mut cells = Self::alloc(rows, cols)?;
        cells.extend((0..rows * cols).map(|_| source.next_boolean()));

        Ok(Self { cells, rows, cols })
    }

    /// Create a grid from explicit rows. Every row must have the same, non-zero, length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let n = rows.len();
        let m = rows.first().map_or(0, Vec::len);

        let mut cells = Self::alloc(n, m)?;

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != m {
                return Err(GridError::Ragged {
                    row,
                    expected: m,
                    got: values.len(),
                });
            }

            cells.extend(values);
        }

        Ok(Self {
            cells,
            rows: n,
            cols: m,
        })
    }

    fn alloc(rows: usize, cols: usize) -> Result<Vec<bool>, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroSized { rows, cols });
        }

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(rows.saturating_mul(cols))
            .map_err(|source| GridError::Allocation { rows, cols, source })?;

        Ok(cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// A grid with a single row or a single column. Some cells of such a grid sit on two opposite
    /// boundaries at once.
    pub fn is_degenerate(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// State of the cell at `coord`, or `None` when it's off the grid
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.contains(coord).then(|| self.cells[self.index(coord)])
    }

    pub fn set(&mut self, coord: Coord, alive: bool) -> Result<(), GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let i = self.index(coord);
        self.cells[i] = alive;

        Ok(())
    }

    /// Row-major iterator over every coordinate of the grid
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord { row, col }))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.cols)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_all_dead(&self) -> bool {
        !self.cells.contains(&true)
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;

        for row in self.iter_rows() {
            let line: String = row.iter().map(|&c| if c { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}

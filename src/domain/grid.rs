use std::fmt;

use rand::Rng;

use super::Cell;
use crate::error::{Error, Result};

/// Grid holds a fixed-size 2D field of cells in one contiguous buffer,
/// indexed row-major as `row * cols + col`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| Cell::Dead)
    }

    /// Build a grid by evaluating `f` for every coordinate in row-major order.
    ///
    /// The buffer is reserved up front, so a failed allocation surfaces as
    /// [`Error::Allocation`] before `f` is ever called.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> Cell,
    ) -> Result<Self> {
        let mut cells = Self::allocate(rows, cols)?;
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    fn allocate(rows: usize, cols: usize) -> Result<Vec<Cell>> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(Error::Allocation { rows, cols })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { rows, cols })?;
        Ok(cells)
    }

    /// Get grid dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Cell at position, or `None` when off the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Whether the cell at position is alive
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx].is_alive())
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = Cell::from(alive);
        Ok(())
    }

    /// Flip a single cell (interactive edits)
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    /// Reseed every cell, each alive independently with `probability`.
    pub fn seed_random(&mut self, probability: f64) -> Result<()> {
        self.seed_random_with(probability, &mut rand::rng())
    }

    /// Same as [`Grid::seed_random`] but drawing from the given random source.
    pub fn seed_random_with<R: Rng>(&mut self, probability: f64, rng: &mut R) -> Result<()> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidProbability(probability));
        }
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(probability)));
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str("  ")?;
                }
                f.write_str(if cell.is_alive() { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

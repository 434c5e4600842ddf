//! Error type shared by the grid, the engine and the configuration layer.

use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A grid needs at least one row and one column.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// The cell buffer could not be allocated.
    #[error("failed to allocate a grid of {rows}x{cols} cells")]
    Allocation { rows: usize, cols: usize },

    /// A coordinate fell outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("seed probability {0} is not within [0, 1]")]
    InvalidProbability(f64),

    #[error("cell size must be positive")]
    InvalidCellSize,
}

pub type Result<T> = std::result::Result<T, Error>;

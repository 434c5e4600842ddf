//! Neighbor counting and the B3/S23 transition rule.
//!
//! The field is bounded: neighbors that would fall off the grid count as
//! dead. There is no toroidal wrapping, so edge and corner cells have fewer
//! effective neighbors.

use super::{Cell, Grid};
use crate::error::{Error, Result};

/// Moore neighborhood as `(row, col)` deltas.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count live neighbors of `(row, col)`, skipping off-grid positions.
///
/// Fails with [`Error::OutOfBounds`] if `(row, col)` itself is not on the grid.
pub fn neighbor_count(grid: &Grid, row: usize, col: usize) -> Result<u8> {
    let (rows, cols) = grid.dimensions();
    if row >= rows || col >= cols {
        return Err(Error::OutOfBounds { row, col, rows, cols });
    }
    Ok(live_neighbors(grid, row, col))
}

/// Unchecked variant used by the engine, which only visits on-grid cells.
pub(crate) fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            grid.cell(r, c)
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// Next state of a single cell from its current state and live neighbor count.
pub const fn next_cell_state(current_alive: bool, neighbor_count: u8) -> bool {
    let current = if current_alive { Cell::Alive } else { Cell::Dead };
    current.evolve(neighbor_count).is_alive()
}

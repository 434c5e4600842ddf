mod cell;
mod engine;
mod grid;
mod patterns;
pub mod rules;

pub use cell::Cell;
pub use engine::step;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::{NEIGHBOR_OFFSETS, neighbor_count, next_cell_state};

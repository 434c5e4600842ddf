//! Startup configuration. Every value has a documented default; nothing is
//! read from disk or the command line.

use crate::error::{Error, Result};

/// Default window width in pixels
pub const SCREEN_WIDTH: u32 = 1280;
/// Default window height in pixels
pub const SCREEN_HEIGHT: u32 = 720;
/// Pixels per cell edge
pub const CELL_SIZE: u32 = 10;
/// Chance that a cell starts alive when the grid is seeded
pub const SEED_PROBABILITY: f64 = 0.10;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_size: u32,
    pub seed_probability: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_size: CELL_SIZE,
            seed_probability: SEED_PROBABILITY,
        }
    }
}

impl Config {
    pub fn with_screen_size(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_seed_probability(mut self, probability: f64) -> Self {
        self.seed_probability = probability;
        self
    }

    /// Reject settings that cannot produce a usable grid.
    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(Error::InvalidCellSize);
        }
        if !(0.0..=1.0).contains(&self.seed_probability) {
            return Err(Error::InvalidProbability(self.seed_probability));
        }
        let (rows, cols) = self.grid_dimensions();
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    /// Grid size as `(rows, cols)`: the screen divided by the cell size.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        if self.cell_size == 0 {
            return (0, 0);
        }
        let rows = self.screen_height / self.cell_size;
        let cols = self.screen_width / self.cell_size;
        (rows as usize, cols as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_72_by_128() {
        let config = Config::default();
        assert_eq!(config.grid_dimensions(), (72, 128));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_screen_size(300, 200)
            .with_cell_size(20)
            .with_seed_probability(0.03);
        assert_eq!(config.grid_dimensions(), (10, 15));
        assert_eq!(config.seed_probability, 0.03);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let config = Config::default().with_cell_size(0);
        assert_eq!(config.validate(), Err(Error::InvalidCellSize));
    }

    #[test]
    fn test_bad_probability_rejected() {
        let config = Config::default().with_seed_probability(2.0);
        assert_eq!(config.validate(), Err(Error::InvalidProbability(2.0)));
    }

    #[test]
    fn test_screen_smaller_than_a_cell_rejected() {
        let config = Config::default().with_screen_size(5, 720);
        assert_eq!(
            config.validate(),
            Err(Error::InvalidDimensions { rows: 72, cols: 0 })
        );
    }
}

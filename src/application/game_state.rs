use super::PlayState;
use crate::config::Config;
use crate::domain::{Grid, step};
use crate::error::Result;

/// GameState orchestrates the simulation.
/// It owns the only grid; rendering and input borrow it once per frame.
#[derive(Debug)]
pub struct GameState {
    pub grid: Grid,
    pub play_state: PlayState,
    pub show_help: bool,
    /// Generations committed since the last reseed or clear
    pub generation: u64,
    /// Steps abandoned because the next grid could not be allocated
    pub skipped_steps: u64,
    seed_probability: f64,
}

impl GameState {
    /// Allocate and seed the grid described by `config`.
    ///
    /// Any error here is fatal: the caller must not enter its frame loop.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let (rows, cols) = config.grid_dimensions();
        let mut grid = Grid::new(rows, cols)?;
        grid.seed_random(config.seed_probability)?;
        log::info!(
            "Grid {rows}x{cols} seeded with p={} ({} alive)",
            config.seed_probability,
            grid.population()
        );
        log::trace!("Initial grid:\n{grid}");

        let mut state = Self::from_grid(grid);
        state.seed_probability = config.seed_probability;
        Ok(state)
    }

    /// Wrap an existing grid; starts playing with the help overlay shown
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            play_state: PlayState::default(),
            show_help: true,
            generation: 0,
            skipped_steps: 0,
            seed_probability: Config::default().seed_probability,
        }
    }

    pub fn is_running(&self) -> bool {
        self.play_state.is_playing()
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.play_state = self.play_state.toggle();
        log::info!("Simulation {}", self.play_state.label().to_lowercase());
        self
    }

    pub fn toggle_help(mut self) -> Self {
        self.show_help = !self.show_help;
        log::info!("Help overlay {}", if self.show_help { "shown" } else { "hidden" });
        self
    }

    /// Flip one cell. Allowed whether playing or paused.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        self.grid.toggle(row, col)?;
        log::debug!("Toggled cell ({row}, {col})");
        Ok(())
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        log::info!("Grid cleared");
        self
    }

    /// Reseed grid and reset generation counter
    pub fn reseed(mut self) -> Self {
        match self.grid.seed_random(self.seed_probability) {
            Ok(()) => {
                self.generation = 0;
                log::info!("Grid reseeded ({} alive)", self.grid.population());
            }
            Err(err) => log::warn!("Reseed failed: {err}"),
        }
        self
    }

    /// Advance the simulation by one frame: one generation iff playing.
    pub fn tick(self) -> Self {
        if !self.is_running() {
            return self;
        }
        let next = step(&self.grid);
        self.commit(next)
    }

    /// Swap in the next generation, or keep the current one if the step failed.
    fn commit(mut self, next: Result<Grid>) -> Self {
        match next {
            Ok(grid) => {
                self.grid = grid;
                self.generation += 1;
            }
            Err(err) => {
                self.skipped_steps += 1;
                log::warn!("Skipping generation {}: {err}", self.generation + 1);
            }
        }
        self
    }
}

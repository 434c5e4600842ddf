// Domain layer - grid, rules and the generation step
pub mod domain;

// Application layer - play/pause state and frame coordination
pub mod application;

pub mod config;
pub mod error;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets, step};
pub use application::{GameState, PlayState};
pub use config::Config;
pub use error::{Error, Result};

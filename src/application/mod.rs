mod game_state;
mod play_state;

pub use game_state::GameState;
pub use play_state::PlayState;

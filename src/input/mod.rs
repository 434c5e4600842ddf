use macroquad::prelude::*;

use crate::application::GameState;

/// Everything the simulation needs from one frame of input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub close_requested: bool,
    /// Pixel position of a left-button press this frame
    pub click: Option<(f32, f32)>,
    pub toggle_play: bool,
    pub toggle_help: bool,
    pub reseed: bool,
    pub clear: bool,
}

/// Poll macroquad for this frame's input
pub fn poll() -> FrameInput {
    FrameInput {
        close_requested: is_quit_requested() || is_key_pressed(KeyCode::Escape),
        click: is_mouse_button_pressed(MouseButton::Left).then(mouse_position),
        toggle_play: is_key_pressed(KeyCode::Space),
        toggle_help: is_key_pressed(KeyCode::H),
        reseed: is_key_pressed(KeyCode::R),
        clear: is_key_pressed(KeyCode::C),
    }
}

/// Convert a pixel position to `(row, col)` by dividing by the cell size.
///
/// Returns `None` for positions left of or above the window. Positions past
/// the far edges are passed through so the grid can reject them.
pub fn pixel_to_cell(x: f32, y: f32, cell_size: u32) -> Option<(usize, usize)> {
    if cell_size == 0 || !(x >= 0.0 && y >= 0.0) {
        return None;
    }
    let size = cell_size as f32;
    Some(((y / size) as usize, (x / size) as usize))
}

/// Apply one frame of input to the game state
pub fn apply(state: GameState, input: &FrameInput, cell_size: u32) -> GameState {
    type KeyAction = (bool, fn(GameState) -> GameState);

    let actions: [KeyAction; 4] = [
        (input.toggle_play, GameState::toggle_running),
        (input.toggle_help, GameState::toggle_help),
        (input.reseed, GameState::reseed),
        (input.clear, GameState::clear),
    ];

    let mut state = actions.iter().fold(state, |s, &(pressed, action)| {
        if pressed { action(s) } else { s }
    });

    if let Some((x, y)) = input.click {
        match pixel_to_cell(x, y, cell_size) {
            Some((row, col)) => {
                if let Err(err) = state.toggle_cell(row, col) {
                    log::warn!("Ignoring click at ({x}, {y}): {err}");
                }
            }
            None => log::warn!("Ignoring click at ({x}, {y}): outside the window"),
        }
    }

    state
}

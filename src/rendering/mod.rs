use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Grid;

const ALIVE_COLOR: Color = YELLOW;
const BACKGROUND_COLOR: Color = DARKGRAY;
const PANEL_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.6);

/// Clear the frame
pub fn draw_background() {
    clear_background(BACKGROUND_COLOR);
}

/// Draw one filled square per live cell at `(col * size, row * size)`
pub fn draw_grid(grid: &Grid, cell_size: u32) {
    let size = cell_size as f32;
    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(row, col, _)| {
            draw_rectangle(col as f32 * size, row as f32 * size, size, size, ALIVE_COLOR);
        });
}

/// Draw the help overlay in the top-left corner
pub fn draw_help(state: &GameState) {
    let (rows, cols) = state.grid.dimensions();
    let lines = [
        "Space: Play/Pause".to_owned(),
        "LMB: Toggle cell".to_owned(),
        "R: Reseed   C: Clear".to_owned(),
        "H: Hide help   Esc: Quit".to_owned(),
        format!("Status: {}", state.play_state.label()),
        format!("Generation: {}", state.generation),
        format!("Alive: {} / {}", state.grid.population(), rows * cols),
    ];

    let line_height = 18.0;
    draw_rectangle(
        5.0,
        5.0,
        230.0,
        line_height * lines.len() as f32 + 10.0,
        PANEL_COLOR,
    );

    lines.iter().enumerate().for_each(|(i, text)| {
        let color = if i == 4 && !state.is_running() { ORANGE } else { WHITE };
        draw_text(text, 12.0, 22.0 + i as f32 * line_height, 18.0, color);
    });
}

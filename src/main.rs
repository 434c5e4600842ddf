use macroquad::prelude::*;
use life::{Config, GameState, input, rendering};

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = Config::default();
    let mut state = match GameState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Cannot start simulation: {err}");
            std::process::exit(1);
        }
    };

    // Window close requests arrive through input::poll
    prevent_quit();

    loop {
        let frame = input::poll();
        if frame.close_requested {
            break;
        }

        state = input::apply(state, &frame, config.cell_size);
        state = state.tick();

        rendering::draw_background();
        rendering::draw_grid(&state.grid, config.cell_size);
        if state.show_help {
            rendering::draw_help(&state);
        }

        next_frame().await;
    }

    log::info!("Shutting down after {} generations", state.generation);
}

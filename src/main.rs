//! CatMp3: a lightweight desktop music player shell
//!
//! Single window, immediate-mode UI: playlist panel, album art, transport
//! controls and a hex-color theme editor. There is no audio engine behind
//! the controls - play/pause is a flag and the position slider a fraction.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod player;
mod playlist;
mod theme;
mod ui;

use macroquad::prelude::*;

use app::AppState;
use assets::{load_cover_texture, load_fonts};
use player::{draw_player, handle_player_action};
use ui::{MouseState, Rect, UiContext};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("CatMp3 v{}", VERSION),
        window_width: 900,
        window_height: 580,
        window_resizable: true,
        high_dpi: true,
        sample_count: 4,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let fonts = load_fonts().await;
    let cover = load_cover_texture("assets/cover.png");

    let mut app = AppState::new(fonts, cover);
    let mut ui_ctx = UiContext::new();

    println!("=== CatMp3 v{} ===", VERSION);

    loop {
        // Fold in a finished folder scan before anything reads the list
        app.poll_pending_scan();

        // Sample the mouse once; event-based edges won't miss fast clicks
        let mouse_pos = mouse_position();
        let mouse_state = MouseState {
            x: mouse_pos.0,
            y: mouse_pos.1,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            scroll: mouse_wheel().1,
        };
        ui_ctx.begin_frame(mouse_state);

        clear_background(app.theme.window_bg);

        let screen = Rect::new(0.0, 0.0, screen_width(), screen_height());
        let action = draw_player(&mut ui_ctx, screen, &mut app);
        handle_player_action(&mut app, action);

        next_frame().await;
    }
}

//! Block Builder: place and remove blocks on a grid from a limited inventory
//!
//! Runs natively and in the browser (WASM). All state lives in memory for
//! the session.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod editor;
mod ui;
mod world;

use macroquad::logging::{info, warn};
use macroquad::prelude::*;
use app::AppState;
use config::{EditorConfig, CONFIG_PATH};
use editor::draw_editor;
use ui::{draw_tooltip, MouseState, UiContext, BG_COLOR};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Block Builder v{}", VERSION),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Load the editor config, falling back to defaults if it is missing or invalid
async fn load_config() -> EditorConfig {
    #[cfg(not(target_arch = "wasm32"))]
    let result = EditorConfig::load(CONFIG_PATH);

    // No filesystem in the browser: fetch through macroquad
    #[cfg(target_arch = "wasm32")]
    let result = match macroquad::file::load_string(CONFIG_PATH).await {
        Ok(text) => EditorConfig::from_ron_str(&text),
        Err(e) => {
            warn!("Could not fetch {}: {}, using defaults", CONFIG_PATH, e);
            return EditorConfig::default();
        }
    };

    match result {
        Ok(config) => {
            info!("Loaded {} ({}x{} grid)", CONFIG_PATH, config.grid_width, config.grid_height);
            config
        }
        Err(e) => {
            warn!("Could not load {}: {}, using defaults", CONFIG_PATH, e);
            EditorConfig::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = load_config().await;
    let mut app = AppState::new(config);
    let mut ui_ctx = UiContext::new();

    info!("=== Block Builder v{} ===", VERSION);

    loop {
        ui_ctx.begin_frame(MouseState::poll());

        app.handle_shortcuts(&ui_ctx);

        clear_background(BG_COLOR);
        let action = draw_editor(&mut ui_ctx, &mut app.layout, &app.editor, &app.actions, &app.config);
        app.apply(action);

        // Tooltips go on top of everything
        draw_tooltip(&ui_ctx);

        next_frame().await;
    }
}

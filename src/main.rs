//! TILEMAZE: tile-grid maze levels
//!
//! Each level is a grid of tile codes (floor, wall, start, goal, obstacle).
//! The viewer draws the bundled levels as flat-color tiles:
//! - Space / Right: next level
//! - Left: previous level
//! - Escape: quit

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod render;
mod world;

use macroquad::prelude::*;
use app::ViewerState;
use config::LevelConfig;
use world::samples::SAMPLE_LEVELS;
use render::{draw_level_at, Canvas, MacroquadCanvas, Palette, Rect};

/// Border around the grid, in pixels
const WINDOW_MARGIN: f32 = 32.0;

/// Window size that fits the first sample level plus a margin on each side
fn window_size() -> (i32, i32) {
    let ts = LevelConfig::default().tile_size;
    let (rows, cols) = SAMPLE_LEVELS
        .first()
        .map(|s| (s.grid.len(), s.grid.first().map(|row| row.len()).unwrap_or(0)))
        .unwrap_or((0, 0));

    (
        (cols as f32 * ts + WINDOW_MARGIN * 2.0) as i32,
        (rows as f32 * ts + WINDOW_MARGIN * 2.0) as i32,
    )
}

fn window_conf() -> Conf {
    let (width, height) = window_size();
    Conf {
        window_title: format!("TILEMAZE v{}", VERSION),
        window_width: width,
        window_height: height,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = LevelConfig::default();
    let palette = Palette::default();
    let mut canvas = MacroquadCanvas::new();

    let mut state = match ViewerState::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to build level: {}", e);
            return;
        }
    };

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let switched = if is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::Right) {
            Some(state.next())
        } else if is_key_pressed(KeyCode::Left) {
            Some(state.prev())
        } else {
            None
        };
        if let Some(Err(e)) = switched {
            eprintln!("Failed to switch level: {}", e);
        }

        clear_background(palette.background);

        // Center the grid in the window
        let screen = Rect::new(0.0, 0.0, screen_width(), screen_height());
        let area = screen.centered(state.level.pixel_width(), state.level.pixel_height());
        draw_level_at(&state.level, &mut canvas, &palette, area.x, area.y);

        if let Some(spawn) = state.spawn {
            let ts = state.level.tile_size();
            let marker = state.level
                .tile_rect(spawn.r, spawn.c)
                .translate(area.x, area.y)
                .pad(ts * state.config.spawn_marker_inset);
            canvas.fill(palette.spawn);
            canvas.rect(marker.x, marker.y, marker.w, marker.h);
        }

        draw_text(state.name(), 8.0, 20.0, 20.0, WHITE);

        next_frame().await;
    }
}

//! Level rendering
//!
//! Every tile is one flat-color rectangle. Drawing goes through `Canvas`,
//! which exposes the same two primitives a sketch-style API has: set the
//! fill color, then draw a rectangle with it.

#![allow(dead_code)]

mod palette;
mod rect;

pub use palette::Palette;
pub use rect::Rect;

use macroquad::prelude::{draw_rectangle, Color, WHITE};
use crate::world::Level;

/// Something that can draw filled rectangles
pub trait Canvas {
    /// Set the color used by following `rect` calls
    fn fill(&mut self, color: Color);
    /// Draw a rectangle with the current fill color
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// Draws straight to the macroquad window
#[derive(Debug, Clone, Copy)]
pub struct MacroquadCanvas {
    color: Color,
}

impl Default for MacroquadCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroquadCanvas {
    pub fn new() -> Self {
        Self { color: WHITE }
    }
}

impl Canvas for MacroquadCanvas {
    fn fill(&mut self, color: Color) {
        self.color = color;
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(x, y, w, h, self.color);
    }
}

/// Draw every tile of the level with its top-left corner at the origin
pub fn draw_level<C: Canvas>(level: &Level, canvas: &mut C, palette: &Palette) {
    draw_level_at(level, canvas, palette, 0.0, 0.0);
}

/// Draw every tile, shifted by (offset_x, offset_y) pixels
pub fn draw_level_at<C: Canvas>(
    level: &Level,
    canvas: &mut C,
    palette: &Palette,
    offset_x: f32,
    offset_y: f32,
) {
    for (pos, tile) in level.iter_tiles() {
        let r = level.tile_rect(pos.r, pos.c).translate(offset_x, offset_y);
        canvas.fill(palette.tile_color(tile));
        canvas.rect(r.x, r.y, r.w, r.h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Tile;

    /// Records draw calls instead of drawing
    #[derive(Default)]
    struct RecordingCanvas {
        color: Option<Color>,
        rects: Vec<(Color, Rect)>,
        fills: usize,
    }

    impl Canvas for RecordingCanvas {
        fn fill(&mut self, color: Color) {
            self.color = Some(color);
            self.fills += 1;
        }

        fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            let color = self.color.expect("rect drawn before fill");
            self.rects.push((color, Rect::new(x, y, w, h)));
        }
    }

    fn sample() -> Level {
        Level::from_codes(vec![
            vec![1, 2, 3],
            vec![4, 0, 1],
        ], 10.0).unwrap()
    }

    #[test]
    fn test_one_rect_per_tile() {
        let level = sample();
        let mut canvas = RecordingCanvas::default();
        draw_level(&level, &mut canvas, &Palette::default());

        assert_eq!(canvas.rects.len(), 6);
        assert_eq!(canvas.fills, 6);
    }

    #[test]
    fn test_row_major_positions_and_colors() {
        let level = sample();
        let palette = Palette::default();
        let mut canvas = RecordingCanvas::default();
        draw_level(&level, &mut canvas, &palette);

        let expected = [
            (palette.wall, Rect::new(0.0, 0.0, 10.0, 10.0)),
            // Start was normalized to floor
            (palette.floor, Rect::new(10.0, 0.0, 10.0, 10.0)),
            (palette.goal, Rect::new(20.0, 0.0, 10.0, 10.0)),
            (palette.obstacle, Rect::new(0.0, 10.0, 10.0, 10.0)),
            (palette.floor, Rect::new(10.0, 10.0, 10.0, 10.0)),
            (palette.wall, Rect::new(20.0, 10.0, 10.0, 10.0)),
        ];
        assert_eq!(canvas.rects, expected);
    }

    #[test]
    fn test_offset() {
        let level = sample();
        let mut canvas = RecordingCanvas::default();
        draw_level_at(&level, &mut canvas, &Palette::default(), 100.0, 50.0);

        assert_eq!(canvas.rects[0].1, Rect::new(100.0, 50.0, 10.0, 10.0));
        assert_eq!(canvas.rects[5].1, Rect::new(120.0, 60.0, 10.0, 10.0));
    }

    #[test]
    fn test_custom_palette() {
        let mut level = sample();
        level.set_tile(1, 1, Tile::Goal);
        let palette = Palette { goal: Color::from_rgba(0, 255, 0, 255), ..Default::default() };
        let mut canvas = RecordingCanvas::default();
        draw_level(&level, &mut canvas, &palette);

        let greens = canvas.rects.iter().filter(|(c, _)| *c == palette.goal).count();
        assert_eq!(greens, 2);
    }
}

//! Tile colors
//!
//! Walls dark teal, goal yellow, obstacles orange, everything else light floor.

use macroquad::prelude::Color;
use crate::world::Tile;

/// Fill color per tile kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub wall: Color,
    pub goal: Color,
    pub obstacle: Color,
    /// Floor, and any leftover start tiles
    pub floor: Color,
    /// Spawn marker drawn by the viewer
    pub spawn: Color,
    /// Screen clear color around the grid
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: Color::from_rgba(30, 50, 60, 255),
            goal: Color::from_rgba(255, 235, 50, 255),
            obstacle: Color::from_rgba(255, 140, 0, 255),
            floor: Color::from_rgba(232, 232, 232, 255),
            spawn: Color::from_rgba(70, 130, 220, 255),
            background: Color::from_rgba(20, 20, 25, 255),
        }
    }
}

impl Palette {
    pub fn tile_color(&self, tile: Tile) -> Color {
        match tile {
            Tile::Wall => self.wall,
            Tile::Goal => self.goal,
            Tile::Obstacle => self.obstacle,
            Tile::Floor | Tile::Start => self.floor,
        }
    }
}

//! World module - tile-grid maze levels
//!
//! - `Tile`: what a grid cell holds (floor, wall, start, goal, obstacle)
//! - `Level`: one maze grid with spawn lookup and collision queries
//! - `samples`: bundled grids for the viewer
//!
//! Note: the query API is wider than what the viewer calls; game code
//! built on top uses the rest.

#![allow(dead_code)]

mod level;
mod tile;
pub mod samples;

pub use level::*;
pub use tile::*;

//! Maze level grid
//!
//! A `Level` is one maze: a row-major grid of tiles plus the pixel size of a
//! tile. Building a level locates the spawn tile and turns it into floor so
//! it draws and behaves like the rest of the walkable area.

use serde::{Deserialize, Serialize};
use crate::config::LevelConfig;
use crate::render::Rect;
use super::Tile;

/// Validation limits for incoming grids
pub mod limits {
    /// Maximum number of rows or columns in a grid
    pub const MAX_GRID_SIZE: usize = 1024;
    /// Maximum tile size in pixels
    pub const MAX_TILE_SIZE: f32 = 4096.0;
}

/// Error type for level construction
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    /// Grid has no rows, or its first row has no columns
    Empty,
    /// A row's length differs from the first row's
    Ragged { row: usize, expected: usize, found: usize },
    /// Grid cell holds a code outside the tile legend
    UnknownTile { code: i32, r: usize, c: usize },
    /// Bare code conversion failed (no grid position known)
    InvalidCode(i32),
    /// Grid exceeds `limits::MAX_GRID_SIZE` in some dimension
    TooLarge { rows: usize, cols: usize },
    /// Tile size is not a positive finite number within limits
    InvalidTileSize(f32),
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Empty => write!(f, "level grid is empty"),
            LevelError::Ragged { row, expected, found } => {
                write!(f, "row {} has {} tiles, expected {}", row, found, expected)
            }
            LevelError::UnknownTile { code, r, c } => {
                write!(f, "unknown tile code {} at ({}, {})", code, r, c)
            }
            LevelError::InvalidCode(code) => write!(f, "unknown tile code {}", code),
            LevelError::TooLarge { rows, cols } => write!(
                f,
                "grid too large ({}x{}, max {})",
                rows, cols, limits::MAX_GRID_SIZE
            ),
            LevelError::InvalidTileSize(size) => write!(f, "invalid tile size {}", size),
        }
    }
}

impl std::error::Error for LevelError {}

/// Grid coordinates: row and column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub r: usize,
    pub c: usize,
}

impl GridPos {
    pub const fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }
}

/// One maze grid
#[derive(Debug, Clone)]
pub struct Level {
    /// Row-major tiles, `rows * cols` long
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
    /// Pixels per tile
    ts: f32,
    /// Spawn found at construction
    start: Option<GridPos>,
}

impl Level {
    /// Build a level from rows of tiles
    ///
    /// The first start tile (row-major) becomes the spawn and is replaced by
    /// floor. A grid without a start tile is valid; `start()` is then None.
    pub fn new(grid: Vec<Vec<Tile>>, tile_size: f32) -> Result<Self, LevelError> {
        if !tile_size.is_finite() || tile_size <= 0.0 || tile_size > limits::MAX_TILE_SIZE {
            return Err(LevelError::InvalidTileSize(tile_size));
        }

        let rows = grid.len();
        let cols = grid.first().map(|row| row.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(LevelError::Empty);
        }
        if rows > limits::MAX_GRID_SIZE || cols > limits::MAX_GRID_SIZE {
            return Err(LevelError::TooLarge { rows, cols });
        }

        let mut tiles = Vec::with_capacity(rows * cols);
        for (row, line) in grid.into_iter().enumerate() {
            if line.len() != cols {
                return Err(LevelError::Ragged { row, expected: cols, found: line.len() });
            }
            tiles.extend(line);
        }

        let mut level = Self { tiles, rows, cols, ts: tile_size, start: None };

        level.start = level.find_start();
        if let Some(pos) = level.start {
            level.tiles[pos.r * cols + pos.c] = Tile::Floor;
        }

        Ok(level)
    }

    /// Build a level from integer tile codes (0 floor, 1 wall, 2 start, 3 goal, 4 obstacle)
    pub fn from_codes(grid: Vec<Vec<i32>>, tile_size: f32) -> Result<Self, LevelError> {
        let mut tiles = Vec::with_capacity(grid.len());
        for (r, line) in grid.into_iter().enumerate() {
            let row = line
                .into_iter()
                .enumerate()
                .map(|(c, code)| Tile::from_code(code).ok_or(LevelError::UnknownTile { code, r, c }))
                .collect::<Result<Vec<_>, _>>()?;
            tiles.push(row);
        }
        Self::new(tiles, tile_size)
    }

    /// Build a level using the tile size from a config
    pub fn with_config(grid: Vec<Vec<Tile>>, config: &LevelConfig) -> Result<Self, LevelError> {
        Self::new(grid, config.tile_size)
    }

    // ----- Size helpers -----

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile_size(&self) -> f32 {
        self.ts
    }

    /// Width of the whole grid in pixels
    pub fn pixel_width(&self) -> f32 {
        self.cols as f32 * self.ts
    }

    /// Height of the whole grid in pixels
    pub fn pixel_height(&self) -> f32 {
        self.rows as f32 * self.ts
    }

    // ----- Semantic helpers -----

    /// Signed so neighbour checks like `(r - 1, c)` work at the edges
    pub fn in_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols
    }

    /// Whether a grid position lies on the grid
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.r < self.rows && pos.c < self.cols
    }

    /// Tile at a cell, None when out of bounds
    pub fn tile_at(&self, r: i32, c: i32) -> Option<Tile> {
        if self.in_bounds(r, c) {
            Some(self.tiles[r as usize * self.cols + c as usize])
        } else {
            None
        }
    }

    pub fn is_wall(&self, r: i32, c: i32) -> bool {
        self.tile_at(r, c) == Some(Tile::Wall)
    }

    pub fn is_obstacle(&self, r: i32, c: i32) -> bool {
        self.tile_at(r, c) == Some(Tile::Obstacle)
    }

    pub fn is_goal(&self, r: i32, c: i32) -> bool {
        self.tile_at(r, c) == Some(Tile::Goal)
    }

    /// Off-grid cells count as blocked
    pub fn is_blocked(&self, r: i32, c: i32) -> bool {
        self.tile_at(r, c).map(Tile::is_blocking).unwrap_or(true)
    }

    /// Overwrite a cell. Returns false if out of bounds.
    pub fn set_tile(&mut self, r: i32, c: i32, tile: Tile) -> bool {
        if !self.in_bounds(r, c) {
            return false;
        }
        self.tiles[r as usize * self.cols + c as usize] = tile;
        true
    }

    // ----- Start-finding -----

    /// Scan row by row for the first start tile
    pub fn find_start(&self) -> Option<GridPos> {
        self.tiles
            .iter()
            .position(|&t| t == Tile::Start)
            .map(|i| GridPos::new(i / self.cols, i % self.cols))
    }

    /// Spawn located when the level was built
    pub fn start(&self) -> Option<GridPos> {
        self.start
    }

    /// Spawn, or `default` when the level has no start tile
    pub fn spawn_or(&self, default: GridPos) -> GridPos {
        self.start.unwrap_or(default)
    }

    /// Spawn, or the config's default spawn
    pub fn spawn(&self, config: &LevelConfig) -> GridPos {
        self.spawn_or(config.default_spawn)
    }

    // ----- Iteration / geometry -----

    /// All cells in row-major order
    pub fn iter_tiles(&self) -> impl Iterator<Item = (GridPos, Tile)> + '_ {
        let cols = self.cols;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (GridPos::new(i / cols, i % cols), t))
    }

    pub fn goals(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.iter_tiles()
            .filter(|&(_, t)| t == Tile::Goal)
            .map(|(pos, _)| pos)
    }

    /// Pixel rectangle covered by a cell (not bounds-checked)
    pub fn tile_rect(&self, r: usize, c: usize) -> Rect {
        Rect::new(c as f32 * self.ts, r as f32 * self.ts, self.ts, self.ts)
    }

    /// Cell under a pixel position, None if outside the grid
    pub fn pixel_to_grid(&self, x: f32, y: f32) -> Option<GridPos> {
        if x < 0.0 || y < 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }

        let r = (y / self.ts) as usize;
        let c = (x / self.ts) as usize;

        if r < self.rows && c < self.cols {
            Some(GridPos::new(r, c))
        } else {
            None
        }
    }
}

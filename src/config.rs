//! Level and viewer settings

use serde::{Deserialize, Serialize};
use crate::world::GridPos;

/// Settings shared by every level the game builds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Pixels per tile
    pub tile_size: f32,
    /// Spawn used when a grid has no start tile
    pub default_spawn: GridPos,
    /// Inset of the spawn marker inside its tile, as a fraction of tile size
    pub spawn_marker_inset: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            default_spawn: GridPos::new(1, 1),
            spawn_marker_inset: 0.25,
        }
    }
}

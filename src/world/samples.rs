//! Bundled maze grids
//!
//! Defined inline so the viewer has something to show without touching disk.

use super::{Level, LevelError, Tile};

/// A named grid of integer tile codes
#[derive(Debug, Clone, Copy)]
pub struct SampleLevel {
    pub name: &'static str,
    pub grid: &'static [&'static [i32]],
}

impl SampleLevel {
    /// Build a `Level` from this grid
    pub fn build(&self, tile_size: f32) -> Result<Level, LevelError> {
        Level::from_codes(self.grid.iter().map(|row| row.to_vec()).collect(), tile_size)
    }
}

pub const SAMPLE_LEVELS: &[SampleLevel] = &[
    SampleLevel {
        name: "corridor",
        grid: &[
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 2, 0, 0, 0, 0, 0, 0, 3, 1],
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ],
    },
    SampleLevel {
        name: "maze",
        grid: &[
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1],
            &[1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1],
            &[1, 0, 1, 0, 0, 0, 0, 4, 0, 1, 0, 1],
            &[1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1],
            &[1, 0, 0, 0, 4, 1, 0, 1, 0, 0, 0, 1],
            &[1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 0, 1],
            &[1, 0, 0, 0, 0, 0, 0, 0, 4, 1, 3, 1],
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ],
    },
    SampleLevel {
        // No start tile: the game picks the default spawn
        name: "courtyard",
        grid: &[
            &[1, 1, 1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 0, 0, 1],
            &[1, 0, 4, 0, 4, 0, 1],
            &[1, 0, 0, 3, 0, 0, 1],
            &[1, 0, 4, 0, 4, 0, 1],
            &[1, 0, 0, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1, 1, 1],
        ],
    },
];

/// Sample by name
pub fn find_sample(name: &str) -> Option<&'static SampleLevel> {
    SAMPLE_LEVELS.iter().find(|s| s.name == name)
}

/// Count of each tile kind in a grid (by `Tile::ALL` order)
pub fn tile_histogram(level: &Level) -> [usize; Tile::COUNT] {
    let mut counts = [0; Tile::COUNT];
    for (_, tile) in level.iter_tiles() {
        counts[tile.code() as usize] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::GridPos;

    #[test]
    fn test_all_samples_build() {
        for sample in SAMPLE_LEVELS {
            let level = sample.build(16.0);
            assert!(level.is_ok(), "{} failed: {:?}", sample.name, level.err());
        }
    }

    #[test]
    fn test_every_sample_has_a_goal() {
        for sample in SAMPLE_LEVELS {
            let level = sample.build(16.0).unwrap();
            assert!(level.goals().next().is_some(), "{} has no goal", sample.name);
        }
    }

    #[test]
    fn test_maze_start() {
        let level = find_sample("maze").unwrap().build(16.0).unwrap();
        assert_eq!(level.start(), Some(GridPos::new(1, 1)));
        assert!(!level.is_blocked(1, 1));
    }

    #[test]
    fn test_courtyard_has_no_start() {
        let level = find_sample("courtyard").unwrap().build(16.0).unwrap();
        assert_eq!(level.start(), None);
        let counts = tile_histogram(&level);
        assert_eq!(counts[Tile::Start.code() as usize], 0);
        assert_eq!(counts[Tile::Obstacle.code() as usize], 4);
        assert_eq!(counts[Tile::Goal.code() as usize], 1);
    }

    #[test]
    fn test_unknown_sample() {
        assert!(find_sample("nope").is_none());
    }
}

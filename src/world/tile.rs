//! Tile codes
//!
//! Each grid cell holds one tile. Tiles serialize as their integer code so
//! grids authored as plain number arrays keep working.

use serde::{Deserialize, Serialize};
use super::LevelError;

/// What occupies a single grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Tile {
    #[default]
    Floor = 0,
    Wall = 1,
    /// Spawn marker. The first one is turned into floor once the level is built.
    Start = 2,
    Goal = 3,
    Obstacle = 4,
}

impl Tile {
    pub const COUNT: usize = 5;
    pub const ALL: [Tile; Self::COUNT] = [Tile::Floor, Tile::Wall, Tile::Start, Tile::Goal, Tile::Obstacle];

    /// Map an integer code to a tile (None for unknown codes)
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Tile::Floor),
            1 => Some(Tile::Wall),
            2 => Some(Tile::Start),
            3 => Some(Tile::Goal),
            4 => Some(Tile::Obstacle),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Walls and obstacles stop movement
    pub fn is_blocking(self) -> bool {
        matches!(self, Tile::Wall | Tile::Obstacle)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tile::Floor => "Floor",
            Tile::Wall => "Wall",
            Tile::Start => "Start",
            Tile::Goal => "Goal",
            Tile::Obstacle => "Obstacle",
        }
    }
}

impl TryFrom<i32> for Tile {
    type Error = LevelError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Tile::from_code(code).ok_or(LevelError::InvalidCode(code))
    }
}

impl From<Tile> for i32 {
    fn from(tile: Tile) -> Self {
        tile.code()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_legend() {
        assert_eq!(Tile::Floor.code(), 0);
        assert_eq!(Tile::Wall.code(), 1);
        assert_eq!(Tile::Start.code(), 2);
        assert_eq!(Tile::Goal.code(), 3);
        assert_eq!(Tile::Obstacle.code(), 4);

        for tile in Tile::ALL {
            assert_eq!(Tile::from_code(tile.code()), Some(tile));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Tile::from_code(5), None);
        assert_eq!(Tile::from_code(-1), None);
        assert!(matches!(Tile::try_from(9), Err(LevelError::InvalidCode(9))));
    }

    #[test]
    fn test_blocking() {
        assert!(Tile::Wall.is_blocking());
        assert!(Tile::Obstacle.is_blocking());
        assert!(!Tile::Floor.is_blocking());
        assert!(!Tile::Goal.is_blocking());
        assert!(!Tile::Start.is_blocking());
    }

    #[test]
    fn test_serializes_as_code() {
        let row = vec![Tile::Wall, Tile::Floor, Tile::Goal];
        let text = ron::to_string(&row).unwrap();
        assert_eq!(text, "[1,0,3]");

        let back: Vec<Tile> = ron::from_str("[4, 2, 0]").unwrap();
        assert_eq!(back, vec![Tile::Obstacle, Tile::Start, Tile::Floor]);

        assert!(ron::from_str::<Vec<Tile>>("[7]").is_err());
    }
}

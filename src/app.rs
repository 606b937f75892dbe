//! Viewer state
//!
//! Holds the level currently on screen and cycles through the bundled samples.

use crate::config::LevelConfig;
use crate::world::samples::{SampleLevel, SAMPLE_LEVELS};
use crate::world::{GridPos, Level, LevelError};

/// Level currently shown plus where the player would spawn in it
pub struct ViewerState {
    pub config: LevelConfig,
    samples: &'static [SampleLevel],
    index: usize,
    pub level: Level,
    /// None when the default spawn falls outside the grid
    pub spawn: Option<GridPos>,
}

/// Build a sample and work out its spawn, logging what was picked
fn load_sample(sample: &SampleLevel, config: &LevelConfig) -> Result<(Level, Option<GridPos>), LevelError> {
    let level = sample.build(config.tile_size)?;

    println!("Showing level '{}' ({}x{})", sample.name, level.cols(), level.rows());
    if level.start().is_none() {
        eprintln!(
            "Level '{}' has no start tile, spawning at default ({}, {})",
            sample.name, config.default_spawn.r, config.default_spawn.c
        );
    }

    let spawn = level.spawn(config);
    if !level.contains(spawn) {
        eprintln!(
            "Level '{}': spawn ({}, {}) is outside the {}x{} grid, no spawn marker",
            sample.name, spawn.r, spawn.c, level.cols(), level.rows()
        );
        return Ok((level, None));
    }

    Ok((level, Some(spawn)))
}

impl ViewerState {
    pub fn new(config: LevelConfig) -> Result<Self, LevelError> {
        Self::with_samples(config, SAMPLE_LEVELS)
    }

    pub fn with_samples(config: LevelConfig, samples: &'static [SampleLevel]) -> Result<Self, LevelError> {
        let first = samples.first().ok_or(LevelError::Empty)?;
        let (level, spawn) = load_sample(first, &config)?;
        Ok(Self { config, samples, index: 0, level, spawn })
    }

    pub fn name(&self) -> &'static str {
        self.samples[self.index].name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance to the next sample, wrapping around
    pub fn next(&mut self) -> Result<(), LevelError> {
        self.select((self.index + 1) % self.samples.len())
    }

    /// Go back one sample, wrapping around
    pub fn prev(&mut self) -> Result<(), LevelError> {
        self.select((self.index + self.samples.len() - 1) % self.samples.len())
    }

    fn select(&mut self, index: usize) -> Result<(), LevelError> {
        let (level, spawn) = load_sample(&self.samples[index], &self.config)?;
        self.level = level;
        self.spawn = spawn;
        self.index = index;
        Ok(())
    }
}

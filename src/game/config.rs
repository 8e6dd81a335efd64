use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

use super::board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH};

/// Speed levels offered by the menu
pub const SPEED_LEVELS: RangeInclusive<u32> = 1..=10;
/// Initial snake lengths offered by the menu
pub const SNAKE_LENGTHS: RangeInclusive<usize> = 3..=30;

/// Tick interval at speed level 1; level `n` ticks `n` times as often
const BASE_TICK: Duration = Duration::from_millis(100);

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Speed level, 1 (slowest) to 10
    pub speed_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_WIDTH,
            grid_height: DEFAULT_HEIGHT,
            initial_snake_length: *SNAKE_LENGTHS.start(),
            speed_level: *SPEED_LEVELS.start(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(12, 12)
    }

    /// Read a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    pub fn board(&self) -> Board {
        Board::new(self.grid_width, self.grid_height)
    }

    /// Time between two game ticks
    pub fn tick_interval(&self) -> Duration {
        BASE_TICK / self.speed_level.max(1)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.grid_width > MAX_WIDTH || self.grid_height > MAX_HEIGHT {
            return Err(format!(
                "grid of {}x{} is too large, at most {}x{} fits the screen",
                self.grid_width, self.grid_height, MAX_WIDTH, MAX_HEIGHT
            ));
        }

        if !SPEED_LEVELS.contains(&self.speed_level) {
            return Err(format!(
                "speed_level must be in {}..={}, got {}",
                SPEED_LEVELS.start(),
                SPEED_LEVELS.end(),
                self.speed_level
            ));
        }

        if !SNAKE_LENGTHS.contains(&self.initial_snake_length) {
            return Err(format!(
                "initial_snake_length must be in {}..={}, got {}",
                SNAKE_LENGTHS.start(),
                SNAKE_LENGTHS.end(),
                self.initial_snake_length
            ));
        }

        Ok(())
    }
}

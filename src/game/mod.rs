//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The snake moves on a wrap-around board and only dies by biting itself.

pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod state;
pub mod wall;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use board::Board;
pub use config::{GameConfig, SNAKE_LENGTHS, SPEED_LEVELS};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use state::{GameState, Position, Snake, StepOutcome};
pub use wall::Wall;

//! ssnake - Snake on a wrap-around board, played in the terminal
//!
//! This library provides:
//! - Core game logic: heading rules, toroidal movement, self-collision (game module)
//! - Start menu selections (menu module)
//! - TUI rendering and key mapping (render, input modules)
//! - The interactive driver loop (modes module)
//! - Log file setup (logging module)

pub mod game;
pub mod input;
pub mod logging;
pub mod menu;
pub mod metrics;
pub mod modes;
pub mod render;

//! Start menu: pick the speed level and the initial snake length

pub mod state;

pub use state::{MenuField, MenuState};

use tracing::info;

use crate::game::{GameConfig, SNAKE_LENGTHS, SPEED_LEVELS};

/// Entry of the start menu that currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuField {
    Speed,
    Length,
    Start,
}

impl MenuField {
    const ORDER: [MenuField; 3] = [MenuField::Speed, MenuField::Length, MenuField::Start];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }
}

/// Selections made on the start menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub speed_level: u32,
    pub snake_length: usize,
    pub focus: MenuField,
}

impl MenuState {
    /// Open the menu preset from `config`, clamped to what the menu offers
    pub fn new(config: &GameConfig) -> Self {
        Self {
            speed_level: config
                .speed_level
                .clamp(*SPEED_LEVELS.start(), *SPEED_LEVELS.end()),
            snake_length: config
                .initial_snake_length
                .clamp(*SNAKE_LENGTHS.start(), *SNAKE_LENGTHS.end()),
            focus: MenuField::Speed,
        }
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % MenuField::ORDER.len();
        self.focus = MenuField::ORDER[next];
    }

    pub fn focus_previous(&mut self) {
        let len = MenuField::ORDER.len();
        let previous = (self.focus.index() + len - 1) % len;
        self.focus = MenuField::ORDER[previous];
    }

    /// Raise the focused value by one, stopping at the top of its range
    pub fn increase(&mut self) {
        match self.focus {
            MenuField::Speed => {
                self.speed_level = (self.speed_level + 1).min(*SPEED_LEVELS.end());
            }
            MenuField::Length => {
                self.snake_length = (self.snake_length + 1).min(*SNAKE_LENGTHS.end());
            }
            MenuField::Start => {}
        }
    }

    /// Lower the focused value by one, stopping at the bottom of its range
    pub fn decrease(&mut self) {
        match self.focus {
            MenuField::Speed => {
                self.speed_level = self
                    .speed_level
                    .saturating_sub(1)
                    .max(*SPEED_LEVELS.start());
            }
            MenuField::Length => {
                self.snake_length = self
                    .snake_length
                    .saturating_sub(1)
                    .max(*SNAKE_LENGTHS.start());
            }
            MenuField::Start => {}
        }
    }

    /// Copy the selections into a game configuration
    pub fn apply_to(&self, base: &GameConfig) -> GameConfig {
        info!(
            speed_level = self.speed_level,
            snake_length = self.snake_length,
            "menu selection confirmed"
        );
        GameConfig {
            speed_level: self.speed_level,
            initial_snake_length: self.snake_length,
            ..base.clone()
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let menu = MenuState::default();
        assert_eq!(menu.speed_level, 1);
        assert_eq!(menu.snake_length, 3);
        assert_eq!(menu.focus, MenuField::Speed);
    }

    #[test]
    fn test_preset_is_clamped() {
        let config = GameConfig {
            speed_level: 50,
            initial_snake_length: 1,
            ..Default::default()
        };
        let menu = MenuState::new(&config);
        assert_eq!(menu.speed_level, 10);
        assert_eq!(menu.snake_length, 3);
    }

    #[test]
    fn test_focus_cycles() {
        let mut menu = MenuState::default();
        menu.focus_next();
        assert_eq!(menu.focus, MenuField::Length);
        menu.focus_next();
        assert_eq!(menu.focus, MenuField::Start);
        menu.focus_next();
        assert_eq!(menu.focus, MenuField::Speed);

        menu.focus_previous();
        assert_eq!(menu.focus, MenuField::Start);
    }

    #[test]
    fn test_speed_stays_in_range() {
        let mut menu = MenuState::default();
        menu.decrease();
        assert_eq!(menu.speed_level, 1);

        for _ in 0..20 {
            menu.increase();
        }
        assert_eq!(menu.speed_level, 10);
    }

    #[test]
    fn test_length_stays_in_range() {
        let mut menu = MenuState::default();
        menu.focus_next();

        menu.decrease();
        assert_eq!(menu.snake_length, 3);

        for _ in 0..40 {
            menu.increase();
        }
        assert_eq!(menu.snake_length, 30);
        assert_eq!(menu.speed_level, 1);
    }

    #[test]
    fn test_start_entry_ignores_adjustments() {
        let mut menu = MenuState::default();
        menu.focus_previous();
        let before = menu.clone();
        menu.increase();
        menu.decrease();
        assert_eq!(menu, before);
    }

    #[test]
    fn test_apply_keeps_grid() {
        let mut menu = MenuState::default();
        menu.increase();
        menu.focus_next();
        menu.increase();

        let config = menu.apply_to(&GameConfig::new(40, 25));
        assert_eq!(config.speed_level, 2);
        assert_eq!(config.initial_snake_length, 4);
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 25);
        assert!(config.validate().is_ok());
    }
}

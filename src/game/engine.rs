use tracing::{debug, info};

use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{GameState, Snake, StepOutcome},
};

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// Whether a requested heading was taken this step
    pub turned: bool,
    /// What the snake did
    pub outcome: StepOutcome,
}

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the episode is over
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// Builds episodes from a configuration and advances them tick by tick
pub struct GameEngine {
    config: GameConfig,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh episode
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.config.initial_snake_length, self.config.board());
        info!(
            speed_level = self.config.speed_level,
            snake_length = snake.len(),
            width = self.config.grid_width,
            height = self.config.grid_height,
            "game started"
        );
        GameState::new(snake)
    }

    /// Request a new heading right away, without moving.
    ///
    /// Every request is checked against the heading in force at that moment,
    /// so of several requests between two ticks the last accepted one wins.
    pub fn turn(&self, state: &mut GameState, direction: Direction) -> bool {
        if !state.is_alive() {
            return false;
        }

        let accepted = state.snake.set_direction(direction);
        if accepted {
            debug!(direction = direction.name(), "heading changed");
        } else {
            debug!(
                direction = direction.name(),
                current = state.snake.direction().name(),
                "reverse turn ignored"
            );
        }
        accepted
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive() {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    turned: false,
                    outcome: StepOutcome::Halted,
                },
            };
        }

        let turned = match action {
            Action::Move(direction) => self.turn(state, direction),
            Action::Continue => false,
        };

        let outcome = state.snake.step();
        state.steps += 1;

        if outcome == StepOutcome::Collided {
            let head = state.snake.head();
            info!(
                steps = state.steps,
                x = head.x,
                y = head.y,
                "game over: snake ran into itself"
            );
        }

        StepResult {
            terminated: state.snake.is_terminated(),
            info: StepInfo { turned, outcome },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert!(state.is_alive());
        assert_eq!(state.steps, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position::new(10, 10));
        assert_eq!(state.wall.len(), 96);
    }

    #[test]
    fn test_reset_uses_configured_length() {
        let config = GameConfig {
            initial_snake_length: 9,
            ..Default::default()
        };
        let mut engine = GameEngine::new(config);
        assert_eq!(engine.reset().snake.len(), 9);
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        let initial_head = state.snake.head();

        let result = engine.step(&mut state, Action::Continue);

        assert!(!result.terminated);
        assert_eq!(result.info.outcome, StepOutcome::Moved);
        assert!(!result.info.turned);
        assert_eq!(state.steps, 1);
        assert_eq!(state.snake.head(), initial_head.moved_by(1, 0));
    }

    #[test]
    fn test_turn_applies_before_move() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();

        let result = engine.step(&mut state, Action::Move(Direction::Up));

        assert!(result.info.turned);
        assert_eq!(state.snake.head(), Position::new(10, 9));
    }

    #[test]
    fn test_turns_apply_one_by_one() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();

        // Down is taken, then Up is the reverse of Down
        assert!(engine.turn(&mut state, Direction::Down));
        assert!(!engine.turn(&mut state, Direction::Up));
        engine.step(&mut state, Action::Continue);

        assert_eq!(state.snake.head(), Position::new(10, 11));
        assert_eq!(state.steps, 1);
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();

        let result = engine.step(&mut state, Action::Move(Direction::Left));

        assert!(!result.info.turned);
        assert_eq!(state.snake.direction(), Direction::Right);
        assert!(state.is_alive());
    }

    #[test]
    fn test_no_wall_collision() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();

        // Ride across the right edge and over the drawn wall
        for _ in 0..40 {
            let result = engine.step(&mut state, Action::Continue);
            assert!(!result.terminated);
        }
        assert_eq!(state.snake.head(), Position::new(20, 10));
    }

    #[test]
    fn test_self_collision() {
        let config = GameConfig {
            initial_snake_length: 4,
            ..Default::default()
        };
        let mut engine = GameEngine::new(config);
        let mut state = engine.reset();

        engine.step(&mut state, Action::Continue);
        engine.step(&mut state, Action::Move(Direction::Up));
        engine.step(&mut state, Action::Move(Direction::Left));
        let result = engine.step(&mut state, Action::Move(Direction::Down));

        assert!(result.terminated);
        assert_eq!(result.info.outcome, StepOutcome::Collided);
        assert!(!state.is_alive());
        assert_eq!(state.steps, 4);
    }

    #[test]
    fn test_terminated_game_no_update() {
        let config = GameConfig {
            initial_snake_length: 4,
            ..Default::default()
        };
        let mut engine = GameEngine::new(config);
        let mut state = engine.reset();
        for action in [
            Action::Continue,
            Action::Move(Direction::Up),
            Action::Move(Direction::Left),
            Action::Move(Direction::Down),
        ] {
            engine.step(&mut state, action);
        }
        let frozen = state.clone();

        let result = engine.step(&mut state, Action::Move(Direction::Right));

        assert!(result.terminated);
        assert_eq!(result.info.outcome, StepOutcome::Halted);
        assert_eq!(state, frozen); // Should not increment
    }
}

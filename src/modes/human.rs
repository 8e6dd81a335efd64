use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::game::{Action, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction, MenuCommand};
use crate::menu::MenuState;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Which screen is up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
}

/// Interactive play in the terminal: menu, game and game over screen
pub struct HumanMode {
    base_config: GameConfig,
    engine: GameEngine,
    state: GameState,
    menu: MenuState,
    screen: Screen,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    /// Set when a new episode needs the tick timer rebuilt
    tick_changed: bool,
}

impl HumanMode {
    /// `skip_menu` starts playing straight away with `config`
    pub fn new(config: GameConfig, skip_menu: bool) -> Self {
        let mut engine = GameEngine::new(config.clone());
        let state = engine.reset();
        let menu = MenuState::new(&config);

        let mut mode = Self {
            base_config: config,
            engine,
            state,
            menu,
            screen: Screen::Menu,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            tick_changed: false,
        };

        if skip_menu {
            mode.start_game(mode.base_config.clone());
        }

        mode
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        if let Err(err) = &result {
            warn!("game loop stopped with error: {:#}", err);
        }
        info!(
            games_played = self.metrics.games_played,
            best_steps = self.metrics.best_steps,
            "session ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = game_tick_timer(self.engine.config().tick_interval());
        self.tick_changed = false;

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| self.draw(frame)).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.tick_changed {
                tick_timer = game_tick_timer(self.engine.config().tick_interval());
                self.tick_changed = false;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Menu => self.renderer.render_menu(frame, &self.menu),
            Screen::Playing | Screen::GameOver => {
                self.renderer.render(frame, &self.state, &self.metrics)
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }
            self.handle_key(key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let action = match self.screen {
            Screen::Menu => self.input_handler.handle_menu_key(key),
            Screen::Playing => self.input_handler.handle_key_event(key),
            Screen::GameOver => self.input_handler.handle_game_over_key(key),
        };

        match action {
            KeyAction::GameAction(Action::Move(dir)) => {
                self.engine.turn(&mut self.state, dir);
            }
            KeyAction::GameAction(Action::Continue) => {}
            KeyAction::Menu(command) => self.handle_menu_command(command),
            KeyAction::Restart => {
                let config = self.engine.config().clone();
                self.start_game(config);
            }
            KeyAction::BackToMenu => {
                self.menu = MenuState::new(self.engine.config());
                self.screen = Screen::Menu;
            }
            KeyAction::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn handle_menu_command(&mut self, command: MenuCommand) {
        match command {
            MenuCommand::FocusNext => self.menu.focus_next(),
            MenuCommand::FocusPrevious => self.menu.focus_previous(),
            MenuCommand::Increase => self.menu.increase(),
            MenuCommand::Decrease => self.menu.decrease(),
            MenuCommand::Confirm => {
                let config = self.menu.apply_to(&self.base_config);
                self.start_game(config);
            }
        }
    }

    fn update_game(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }

        // Turns were already applied as the keys came in
        let result = self.engine.step(&mut self.state, Action::Continue);

        if result.terminated {
            self.metrics.on_game_over(self.state.steps);
            self.screen = Screen::GameOver;
        }
    }

    fn start_game(&mut self, config: GameConfig) {
        if config.tick_interval() != self.engine.config().tick_interval() {
            self.tick_changed = true;
        }
        self.engine = GameEngine::new(config);
        self.state = self.engine.reset();
        self.metrics.on_game_start();
        self.screen = Screen::Playing;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

fn game_tick_timer(period: Duration) -> Interval {
    let mut timer = interval(period);
    // A stalled frame should not turn into a burst of moves
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(mode: &mut HumanMode, code: KeyCode) {
        mode.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_starts_on_menu() {
        let mode = HumanMode::new(GameConfig::default(), false);
        assert_eq!(mode.screen(), Screen::Menu);
    }

    #[test]
    fn test_ticks_ignored_on_menu() {
        let mut mode = HumanMode::new(GameConfig::default(), false);
        let before = mode.state.clone();
        mode.update_game();
        assert_eq!(mode.state, before);
    }

    #[test]
    fn test_menu_starts_game_with_selection() {
        let mut mode = HumanMode::new(GameConfig::default(), false);

        press(&mut mode, KeyCode::Right); // speed 2
        press(&mut mode, KeyCode::Right); // speed 3
        press(&mut mode, KeyCode::Down);
        press(&mut mode, KeyCode::Right); // length 4
        press(&mut mode, KeyCode::Enter);

        assert_eq!(mode.screen(), Screen::Playing);
        assert_eq!(mode.engine.config().speed_level, 3);
        assert_eq!(mode.state.snake.len(), 4);
        assert!(mode.tick_changed);
    }

    #[test]
    fn test_skip_menu() {
        let mode = HumanMode::new(GameConfig::default(), true);
        assert_eq!(mode.screen(), Screen::Playing);
        assert!(!mode.tick_changed);
    }

    #[test]
    fn test_each_key_turns_immediately() {
        let mut mode = HumanMode::new(GameConfig::default(), true);

        // Down is taken at once, so the following Up is a reverse and ignored
        press(&mut mode, KeyCode::Down);
        press(&mut mode, KeyCode::Up);
        mode.update_game();

        assert_eq!(mode.state.snake.head(), Position::new(10, 11));
        assert_eq!(mode.state.snake.direction(), Direction::Down);
    }

    #[test]
    fn test_later_key_in_tick_wins() {
        let config = GameConfig {
            initial_snake_length: 1,
            ..Default::default()
        };
        let mut mode = HumanMode::new(config, true);

        press(&mut mode, KeyCode::Up);
        press(&mut mode, KeyCode::Left);
        mode.update_game();

        assert_eq!(mode.state.snake.head(), Position::new(9, 10));
    }

    #[test]
    fn test_game_over_and_restart() {
        let config = GameConfig {
            initial_snake_length: 4,
            ..Default::default()
        };
        let mut mode = HumanMode::new(config, true);

        mode.update_game();
        press(&mut mode, KeyCode::Up);
        mode.update_game();
        press(&mut mode, KeyCode::Left);
        mode.update_game();
        press(&mut mode, KeyCode::Down);
        mode.update_game();

        assert_eq!(mode.screen(), Screen::GameOver);
        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(mode.metrics.best_steps, 4);

        press(&mut mode, KeyCode::Char('r'));
        assert_eq!(mode.screen(), Screen::Playing);
        assert!(mode.state.is_alive());
        assert_eq!(mode.state.snake.len(), 4);
    }

    #[test]
    fn test_enter_exits_from_game_over() {
        let config = GameConfig {
            initial_snake_length: 4,
            ..Default::default()
        };
        let mut mode = HumanMode::new(config, true);
        for code in [KeyCode::Right, KeyCode::Up, KeyCode::Left, KeyCode::Down] {
            press(&mut mode, code);
            mode.update_game();
        }
        assert_eq!(mode.screen(), Screen::GameOver);

        press(&mut mode, KeyCode::Enter);
        assert!(mode.should_quit);
    }

    #[test]
    fn test_back_to_menu_keeps_selection() {
        let config = GameConfig {
            speed_level: 6,
            initial_snake_length: 8,
            ..Default::default()
        };
        let mut mode = HumanMode::new(config, true);

        press(&mut mode, KeyCode::Char('m'));

        assert_eq!(mode.screen(), Screen::Menu);
        assert_eq!(mode.menu.speed_level, 6);
        assert_eq!(mode.menu.snake_length, 8);
    }
}

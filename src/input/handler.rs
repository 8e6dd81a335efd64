use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

/// Menu navigation requested by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    FocusNext,
    FocusPrevious,
    Increase,
    Decrease,
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Menu(MenuCommand),
    Restart,
    BackToMenu,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Keys while a game is running
    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if is_ctrl_c(&key) {
            return KeyAction::Quit;
        }

        if let Some(direction) = direction_for(key.code) {
            return KeyAction::GameAction(Action::Move(direction));
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            KeyCode::Char('m') | KeyCode::Char('M') => KeyAction::BackToMenu,
            _ => KeyAction::None,
        }
    }

    /// Keys on the start menu
    pub fn handle_menu_key(&self, key: KeyEvent) -> KeyAction {
        if is_ctrl_c(&key) {
            return KeyAction::Quit;
        }

        let command = match direction_for(key.code) {
            Some(Direction::Up) => MenuCommand::FocusPrevious,
            Some(Direction::Down) => MenuCommand::FocusNext,
            Some(Direction::Left) => MenuCommand::Decrease,
            Some(Direction::Right) => MenuCommand::Increase,
            None => match key.code {
                KeyCode::Tab => MenuCommand::FocusNext,
                KeyCode::BackTab => MenuCommand::FocusPrevious,
                KeyCode::Char('+') => MenuCommand::Increase,
                KeyCode::Char('-') => MenuCommand::Decrease,
                KeyCode::Enter | KeyCode::Char(' ') => MenuCommand::Confirm,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return KeyAction::Quit,
                _ => return KeyAction::None,
            },
        };

        KeyAction::Menu(command)
    }

    /// Keys on the game over screen; Enter exits like Q does
    pub fn handle_game_over_key(&self, key: KeyEvent) -> KeyAction {
        if is_ctrl_c(&key) {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                KeyAction::Quit
            }
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            KeyCode::Char('m') | KeyCode::Char('M') => KeyAction::BackToMenu,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Arrow keys and WASD, either case
fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

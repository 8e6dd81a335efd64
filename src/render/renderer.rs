use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{GameState, Position, SNAKE_LENGTHS, SPEED_LEVELS};
use crate::menu::{MenuField, MenuState};
use crate::metrics::GameMetrics;

/// What a grid cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Wall,
    Empty,
}

/// Classify a cell; the snake is drawn on top of the wall
pub fn cell_kind(state: &GameState, pos: Position) -> CellKind {
    if pos == state.snake.head() {
        CellKind::Head
    } else if state.snake.occupies(pos) {
        CellKind::Body
    } else if state.wall.contains(pos) {
        CellKind::Wall
    } else {
        CellKind::Empty
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw a running (or just finished) game
    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        let board = state.board();
        let game_area = centered(
            chunks[1],
            grid_columns(board.width()),
            grid_rows(board.height()),
        );

        if state.is_alive() {
            frame.render_widget(self.render_grid(state), game_area);
        } else {
            frame.render_widget(self.render_game_over(state, metrics), game_area);
        }

        let controls = self.render_controls(state.is_alive());
        frame.render_widget(controls, chunks[2]);
    }

    /// Draw the start menu
    pub fn render_menu(&self, frame: &mut Frame, menu: &MenuState) {
        let area = centered(frame.area(), 48, 13);

        let speed = value_line(
            "Speed level",
            menu.speed_level as usize,
            *SPEED_LEVELS.start() as usize,
            *SPEED_LEVELS.end() as usize,
            menu.focus == MenuField::Speed,
        );
        let length = value_line(
            "Snake length",
            menu.snake_length,
            *SNAKE_LENGTHS.start(),
            *SNAKE_LENGTHS.end(),
            menu.focus == MenuField::Length,
        );

        let start_style = if menu.focus == MenuField::Start {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };

        let text = vec![
            Line::from(""),
            speed,
            Line::from(""),
            length,
            Line::from(""),
            Line::from(Span::styled(" Start game ", start_style)),
            Line::from(""),
            Line::from(vec![
                Span::styled("↑↓", Style::default().fg(Color::Cyan)),
                Span::raw(" select  "),
                Span::styled("←→", Style::default().fg(Color::Cyan)),
                Span::raw(" adjust  "),
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" start  "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ]),
        ];

        let menu_widget = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Snake "),
        );
        frame.render_widget(menu_widget, area);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let board = state.board();
        let mut lines = Vec::with_capacity(board.height());

        for y in 0..board.height() {
            let mut spans = Vec::with_capacity(board.width());

            for x in 0..board.width() {
                let pos = Position::new(x as i32, y as i32);

                let cell = match cell_kind(state, pos) {
                    CellKind::Head => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
                    CellKind::Wall => Span::styled("▒▒", Style::default().fg(Color::Red)),
                    CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Steps: ", label),
            Span::styled(state.steps.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(state.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_steps.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.clock(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Steps survived: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.steps.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Games played: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.games_played.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(" exit  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" play again  ", Style::default().fg(Color::Gray)),
                Span::styled("M", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::styled(" menu", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, alive: bool) -> Paragraph<'_> {
        let text = if alive {
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" restart | "),
                Span::styled("M", Style::default().fg(Color::Cyan)),
                Span::raw(" menu | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        } else {
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Red)),
                Span::raw(" or "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to exit"),
            ])
        };

        Paragraph::new(vec![text]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal columns taken by a grid `width` cells wide, border included
fn grid_columns(width: usize) -> u16 {
    u16::try_from(width)
        .unwrap_or(u16::MAX)
        .saturating_mul(2)
        .saturating_add(2)
}

/// Terminal rows taken by a grid `height` cells tall, border included
fn grid_rows(height: usize) -> u16 {
    u16::try_from(height).unwrap_or(u16::MAX).saturating_add(2)
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn value_line(label: &str, value: usize, min: usize, max: usize, focused: bool) -> Line<'static> {
    let filled = value - min + 1;
    let total = max - min + 1;
    // Scale the bar to 20 cells so both ranges look alike
    let bar_cells = (filled * 20).div_ceil(total);
    let bar = format!("{}{}", "█".repeat(bar_cells), "░".repeat(20 - bar_cells));

    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<13}", label), label_style),
        Span::styled(bar, Style::default().fg(Color::Green)),
        Span::styled(format!(" {:>2}", value), Style::default().fg(Color::White)),
    ])
}

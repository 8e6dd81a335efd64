use std::time::{Duration, Instant};

/// Session statistics shown alongside the board
///
/// The episode clock runs from `on_game_start` until `on_game_over` and then
/// holds its last reading until the next episode starts.
#[derive(Debug, Default)]
pub struct GameMetrics {
    /// Set while an episode is running
    episode_start: Option<Instant>,
    /// Clock reading of the current or last finished episode
    pub episode_time: Duration,
    /// Most steps any episode survived this session
    pub best_steps: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the episode clock
    pub fn update(&mut self) {
        if let Some(start) = self.episode_start {
            self.episode_time = start.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.episode_start = Some(Instant::now());
        self.episode_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, steps: u32) {
        self.update();
        self.episode_start = None;
        self.games_played += 1;
        self.best_steps = self.best_steps.max(steps);
    }

    pub fn is_running(&self) -> bool {
        self.episode_start.is_some()
    }

    /// Episode clock as `mm:ss`
    pub fn clock(&self) -> String {
        format_clock(self.episode_time)
    }
}

/// Minutes keep counting past an hour rather than rolling over
fn format_clock(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

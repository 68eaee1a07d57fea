use std::time::{Duration, Instant};

/// Per-process statistics shown by the host across restarts
pub struct GameMetrics {
    /// Start of the current game; `None` once it is over
    started: Option<Instant>,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub total_score: u64,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started: Some(Instant::now()),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            total_score: 0,
        }
    }

    /// Refresh the clock of the running game. The clock stays frozen after game over.
    pub fn update(&mut self) {
        if let Some(started) = self.started {
            self.elapsed_time = started.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.started = Some(Instant::now());
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        if self.started.is_none() {
            return;
        }
        self.update();
        self.started = None;

        self.games_played += 1;
        self.total_score += u64::from(final_score);
        self.high_score = self.high_score.max(final_score);
    }

    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.games_played)
        }
    }

    pub fn format_average(&self) -> String {
        format!("{:.1}", self.average_score())
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

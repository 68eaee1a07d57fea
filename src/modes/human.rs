use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{DirectionSlot, GameSession, SessionConfig, SessionSummary, Snapshot};
use crate::input::{Control, spawn_input_listener};
use crate::log;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct HumanMode {
    session: GameSession,
    snapshot: Snapshot,
    metrics: GameMetrics,
    renderer: Renderer,
    slot: DirectionSlot,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let session = GameSession::new(config).context("Invalid session configuration")?;
        let snapshot = session.snapshot();

        let mut mode = Self {
            session,
            snapshot,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            slot: DirectionSlot::new(),
            should_quit: false,
        };
        mode.record_if_over();

        Ok(mode)
    }

    /// Count a game that ended without a tick, e.g. a board full from the start
    fn record_if_over(&mut self) {
        if !self.session.is_running() {
            self.metrics.on_game_over(self.session.score());
        }
    }

    /// Play until the player quits or declines a restart
    pub async fn run(mut self) -> Result<SessionSummary> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let (control_tx, mut controls) = unbounded_channel();
        let listener = spawn_input_listener(self.slot.clone(), control_tx);

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal, &mut controls).await;

        listener.abort();
        Self::cleanup_terminal(&mut terminal)?;

        result?;
        Ok(self.session.finish())
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        controls: &mut UnboundedReceiver<Control>,
    ) -> Result<()> {
        let mut tick_timer = interval(self.session.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                control = controls.recv() => {
                    match control {
                        Some(control) => self.handle_control(control),
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
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_control(&mut self, control: Control) {
        match control {
            Control::Restart if !self.session.is_running() => self.reset_game(),
            Control::Decline if !self.session.is_running() => {
                log!("Restart declined");
                self.should_quit = true;
            }
            Control::Quit => {
                log!("Quit requested");
                self.should_quit = true;
            }
            Control::Restart | Control::Decline => {}
        }
    }

    fn update_game(&mut self) {
        if !self.session.is_running() {
            return;
        }

        if let Some(direction) = self.slot.take() {
            self.session.on_direction_input(direction);
        }

        self.snapshot = self.session.tick().snapshot;
        self.record_if_over();
    }

    fn reset_game(&mut self) {
        self.session.restart();
        self.snapshot = self.session.snapshot();
        self.metrics.on_game_start();
        self.record_if_over();
        self.slot.take();
    }

    fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, SessionStatus};

    fn mode() -> HumanMode {
        HumanMode::new(SessionConfig::small().with_seed(1)).unwrap()
    }

    fn play_until_over(mode: &mut HumanMode) {
        while mode.session.is_running() {
            mode.update_game();
        }
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert_eq!(mode.snapshot.status, SessionStatus::Running);
        assert_eq!(mode.snapshot.score, 0);
        assert_eq!(mode.snapshot.snake.len(), 3);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(HumanMode::new(SessionConfig::new(0, 0)).is_err());
    }

    #[test]
    fn test_slot_input_applied_on_tick() {
        let mut mode = mode();
        let head = mode.snapshot.snake[0];

        mode.slot.set(Direction::Down);
        mode.update_game();

        assert_eq!(mode.snapshot.snake[0], head.moved_by(0, 1));
        assert_eq!(mode.slot.take(), None);
    }

    #[test]
    fn test_game_over_records_metrics_once() {
        let mut mode = mode();
        play_until_over(&mut mode);
        mode.update_game();

        assert_eq!(mode.snapshot.status, SessionStatus::Over);
        assert_eq!(mode.metrics.games_played, 1);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut mode = mode();
        mode.update_game();
        mode.handle_control(Control::Restart);
        assert_eq!(mode.snapshot.ticks, 1);

        play_until_over(&mut mode);
        mode.handle_control(Control::Restart);

        assert_eq!(mode.snapshot.status, SessionStatus::Running);
        assert_eq!(mode.snapshot.score, 0);
        assert_eq!(mode.snapshot.ticks, 0);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_decline_ends_only_after_game_over() {
        let mut mode = mode();
        mode.handle_control(Control::Decline);
        assert!(!mode.should_quit);

        play_until_over(&mut mode);
        mode.handle_control(Control::Decline);
        assert!(mode.should_quit);

        let summary = mode.session.finish();
        assert!(summary.end_reason.is_some());
    }

    #[test]
    fn test_session_over_at_start_is_counted() {
        let config = SessionConfig {
            initial_length: 1,
            ..SessionConfig::new(1, 1).with_seed(2)
        };
        let mut mode = HumanMode::new(config).unwrap();

        assert_eq!(mode.snapshot.status, SessionStatus::Over);
        assert_eq!(mode.metrics.games_played, 1);

        mode.update_game();
        assert_eq!(mode.metrics.games_played, 1);

        mode.handle_control(Control::Restart);
        assert_eq!(mode.snapshot.status, SessionStatus::Over);
        assert_eq!(mode.metrics.games_played, 2);
    }

    #[test]
    fn test_quit_any_time() {
        let mut mode = mode();
        mode.handle_control(Control::Quit);
        assert!(mode.should_quit);
    }
}

//! Runs in its own process so the global logger sees only this session.

use grid_snake::game::{EndReason, GameSession, SessionConfig};
use grid_snake::logger::init_logger;
use tempfile::TempDir;

#[test]
fn test_start_is_logged_before_board_full_game_over() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snake.log");
    init_logger(None, &path).unwrap();

    let config = SessionConfig {
        initial_length: 1,
        ..SessionConfig::new(1, 1).with_seed(3)
    };
    let session = GameSession::new(config).unwrap();
    assert_eq!(session.end_reason(), Some(EndReason::BoardFull));

    let log = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    let started = lines
        .iter()
        .position(|l| l.contains("Session started on 1x1 grid"))
        .unwrap();
    let over = lines
        .iter()
        .position(|l| l.contains("Game over (BoardFull)"))
        .unwrap();

    assert!(started < over);
}

//! Grid Snake - a deterministic, fixed-timestep snake simulation
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - Terminal input handling (input module)
//! - TUI rendering of session snapshots (render module)
//! - Cross-game statistics (metrics module)
//! - The interactive terminal host (modes module)

pub mod logger;

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

//! Core simulation for grid snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A host drives it by forwarding direction input and calling `tick` on a fixed cadence.

pub mod action;
pub mod config;
pub mod food;
pub mod grid;
pub mod session;
pub mod slot;
pub mod snake;

// Re-export commonly used types
pub use action::Direction;
pub use config::{ConfigError, SessionConfig};
pub use food::FoodSpawner;
pub use grid::{Cell, GridWorld};
pub use session::{EndReason, GameSession, SessionStatus, SessionSummary, Snapshot, TickOutcome};
pub use slot::DirectionSlot;
pub use snake::{AdvanceResult, SnakeState};

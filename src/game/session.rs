//! The game session: owns all simulation state and advances it one tick at a time.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{
    action::Direction,
    config::{ConfigError, SessionConfig},
    food::FoodSpawner,
    grid::{Cell, GridWorld},
    snake::SnakeState,
};
use crate::log;

/// Whether the session still accepts ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Over,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// No free cell is left for food
    BoardFull,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Snake cells, head first
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub status: SessionStatus,
    pub end_reason: Option<EndReason>,
    /// Completed ticks since the last start or restart
    pub ticks: u64,
    pub grid_width: usize,
    pub grid_height: usize,
}

/// Result of a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub snapshot: Snapshot,
    pub status: SessionStatus,
    pub score: u32,
    /// Whether the snake ate food on this tick
    pub ate_food: bool,
}

/// Final figures of a session whose restart was declined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub ticks: u64,
    pub end_reason: Option<EndReason>,
}

/// A running game. Input and scheduling collaborators only talk to this type.
pub struct GameSession {
    config: SessionConfig,
    grid: GridWorld,
    spawner: FoodSpawner,
    rng: ChaCha8Rng,
    snake: SnakeState,
    food: Option<Cell>,
    score: u32,
    ticks: u64,
    status: SessionStatus,
    end_reason: Option<EndReason>,
}

impl GameSession {
    /// Validate the configuration and start a fresh session
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = GridWorld::new(config.grid_width_units, config.grid_height_units);
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let snake = Self::initial_snake(&config, &grid);

        let mut session = Self {
            grid,
            spawner: FoodSpawner::new(grid),
            rng,
            snake,
            food: None,
            score: 0,
            ticks: 0,
            status: SessionStatus::Running,
            end_reason: None,
            config,
        };
        log!(
            "Session started on {}x{} grid",
            session.grid.width(),
            session.grid.height()
        );
        session.respawn_food();

        Ok(session)
    }

    fn initial_snake(config: &SessionConfig, grid: &GridWorld) -> SnakeState {
        SnakeState::new(grid.center(), Direction::Right, config.initial_length)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridWorld {
        &self.grid
    }

    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Turn request from the input collaborator; reversals are absorbed
    pub fn on_direction_input(&mut self, direction: Direction) {
        if self.is_running() {
            self.snake.set_direction(direction);
        }
    }

    /// Advance the simulation by one tick. A finished session is left untouched.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return self.outcome(false);
        }

        let ate_food = self.food == Some(self.snake.next_head());
        if ate_food {
            self.snake.grow();
        }

        let result = self.snake.advance(&self.grid);
        self.ticks += 1;

        if result.collided_wall {
            self.end(EndReason::Wall);
        } else if result.collided_self {
            self.end(EndReason::SelfCollision);
        } else if ate_food {
            self.score += 1;
            self.food = None;
            self.respawn_food();
        }

        self.outcome(ate_food)
    }

    /// Reinitialize all state after the player confirmed a restart
    pub fn restart(&mut self) {
        self.snake = Self::initial_snake(&self.config, &self.grid);
        self.food = None;
        self.score = 0;
        self.ticks = 0;
        self.status = SessionStatus::Running;
        self.end_reason = None;
        self.respawn_food();

        log!("Session restarted");
    }

    /// End the session for good, after the player declined a restart
    pub fn finish(self) -> SessionSummary {
        log!("Session finished with score {}", self.score);

        SessionSummary {
            score: self.score,
            ticks: self.ticks,
            end_reason: self.end_reason,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.cells().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
            end_reason: self.end_reason,
            ticks: self.ticks,
            grid_width: self.grid.width(),
            grid_height: self.grid.height(),
        }
    }

    fn outcome(&self, ate_food: bool) -> TickOutcome {
        TickOutcome {
            snapshot: self.snapshot(),
            status: self.status,
            score: self.score,
            ate_food,
        }
    }

    fn respawn_food(&mut self) {
        self.food = self.spawner.spawn(&self.snake, &mut self.rng);
        if self.food.is_none() {
            self.end(EndReason::BoardFull);
        }
    }

    fn end(&mut self, reason: EndReason) {
        self.status = SessionStatus::Over;
        self.end_reason = Some(reason);

        log!(
            "Game over ({:?}) after {} ticks, score {}",
            reason,
            self.ticks,
            self.score
        );
    }
}

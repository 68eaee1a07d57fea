use std::collections::VecDeque;

use super::action::Direction;
use super::grid::{Cell, GridWorld};

/// Outcome of moving the snake one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceResult {
    /// Head cell after the move (outside the grid on a wall hit)
    pub new_head: Cell,
    pub collided_wall: bool,
    pub collided_self: bool,
}

impl AdvanceResult {
    pub fn collided(&self) -> bool {
        self.collided_wall || self.collided_self
    }
}

/// The snake: body segments with the head at the front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeState {
    body: VecDeque<Cell>,
    /// Direction of the last move
    direction: Direction,
    /// Direction the next move will take
    pending_direction: Direction,
    grow_pending: bool,
}

impl SnakeState {
    /// Create a snake with `length` segments trailing behind `head`.
    /// A length of zero is treated as one.
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let back = direction.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        body.push_back(head);

        for _ in 1..length {
            let last = body[body.len() - 1];
            body.push_back(last.step(back));
        }

        Self {
            body,
            direction,
            pending_direction: direction,
            grow_pending: false,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn is_growing(&self) -> bool {
        self.grow_pending
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true; the body always keeps its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body cells from head to tail
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Request a turn for the next move. Reversing onto the neck is ignored.
    pub fn set_direction(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.pending_direction = requested;
        }
    }

    /// Keep the tail on the next advance
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// Where the head will be after the next advance
    pub fn next_head(&self) -> Cell {
        self.head().step(self.pending_direction)
    }

    /// Move one cell in the pending direction.
    ///
    /// The tail cell is about to vacate unless growth is pending, so it is
    /// not counted as an obstacle. On a collision the body stays where it
    /// was; the direction and growth flag are still consumed.
    pub fn advance(&mut self, grid: &GridWorld) -> AdvanceResult {
        self.direction = self.pending_direction;
        let new_head = self.head().step(self.direction);

        let collided_wall = !grid.contains(new_head);
        let obstacles = if self.grow_pending {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        let collided_self = self.body.iter().take(obstacles).any(|c| *c == new_head);

        let result = AdvanceResult {
            new_head,
            collided_wall,
            collided_self,
        };

        if !result.collided() {
            self.body.push_front(new_head);
            if !self.grow_pending {
                self.body.pop_back();
            }
        }
        self.grow_pending = false;

        result
    }
}

use rand::Rng;

use super::grid::{Cell, GridWorld};
use super::snake::SnakeState;

/// Rejected draws per grid cell before falling back to picking from the free list
const DRAWS_PER_CELL: usize = 4;

/// Places food on cells the snake does not occupy
#[derive(Debug, Clone, Copy)]
pub struct FoodSpawner {
    grid: GridWorld,
}

impl FoodSpawner {
    pub fn new(grid: GridWorld) -> Self {
        Self { grid }
    }

    /// Draw a free cell uniformly at random.
    ///
    /// Returns `None` when the snake covers the whole grid.
    pub fn spawn<R: Rng + ?Sized>(&self, snake: &SnakeState, rng: &mut R) -> Option<Cell> {
        let total = self.grid.cell_count();
        if snake.len() >= total {
            return None;
        }

        for _ in 0..total * DRAWS_PER_CELL {
            let cell = self.grid.cell_at(rng.gen_range(0..total));
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }

        // Crowded board: choose among what is left.
        let free: Vec<Cell> = self.grid.cells().filter(|c| !snake.occupies(*c)).collect();
        if free.is_empty() {
            None
        } else {
            Some(free[rng.gen_range(0..free.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_avoids_snake() {
        let grid = GridWorld::new(5, 5);
        let spawner = FoodSpawner::new(grid);
        let snake = SnakeState::new(Cell::new(4, 2), Direction::Right, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..500 {
            let food = spawner.spawn(&snake, &mut rng).expect("board has free cells");
            assert!(grid.contains(food));
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn test_spawn_finds_last_free_cell() {
        // 3x1 grid, snake covers two of three cells.
        let grid = GridWorld::new(3, 1);
        let spawner = FoodSpawner::new(grid);
        let snake = SnakeState::new(Cell::new(2, 0), Direction::Right, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..50 {
            assert_eq!(spawner.spawn(&snake, &mut rng), Some(Cell::new(0, 0)));
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let grid = GridWorld::new(3, 1);
        let spawner = FoodSpawner::new(grid);
        let snake = SnakeState::new(Cell::new(2, 0), Direction::Right, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(spawner.spawn(&snake, &mut rng), None);
    }

    #[test]
    fn test_spawn_reaches_every_free_cell() {
        let grid = GridWorld::new(4, 4);
        let spawner = FoodSpawner::new(grid);
        let snake = SnakeState::new(Cell::new(2, 2), Direction::Right, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            if let Some(cell) = spawner.spawn(&snake, &mut rng) {
                seen.insert(cell);
            }
        }
        assert_eq!(seen.len(), grid.cell_count() - snake.len());
    }
}

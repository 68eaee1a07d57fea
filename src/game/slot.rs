use std::sync::{Arc, Mutex, PoisonError};

use super::action::Direction;

/// Single-slot hand-off for direction input produced off the tick task.
///
/// Writers overwrite whatever is waiting; the tick driver takes the latest
/// value once per tick. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct DirectionSlot {
    inner: Arc<Mutex<Option<Direction>>>,
}

impl DirectionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a direction, replacing any unread one
    pub fn set(&self, direction: Direction) {
        // The slot holds plain data, a poisoned lock is still usable.
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(direction);
    }

    /// Take the waiting direction, leaving the slot empty
    pub fn take(&self) -> Option<Direction> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

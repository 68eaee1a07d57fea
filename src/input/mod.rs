pub mod handler;
pub mod listener;

pub use handler::{InputHandler, KeyAction};
pub use listener::{Control, spawn_input_listener};

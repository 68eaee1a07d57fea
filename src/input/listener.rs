//! Terminal input task.
//!
//! Reads crossterm events on its own tokio task. Turns are handed to the
//! tick loop through a `DirectionSlot`; everything else travels over a
//! channel.

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::handler::{InputHandler, KeyAction};
use crate::game::DirectionSlot;

/// Non-directional requests from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Restart,
    Decline,
    Quit,
}

/// Route one key action. Returns false once the receiver is gone.
pub fn dispatch(action: KeyAction, slot: &DirectionSlot, controls: &UnboundedSender<Control>) -> bool {
    let control = match action {
        KeyAction::Turn(direction) => {
            slot.set(direction);
            return true;
        }
        KeyAction::Restart => Control::Restart,
        KeyAction::Decline => Control::Decline,
        KeyAction::Quit => Control::Quit,
        KeyAction::None => return true,
    };

    controls.send(control).is_ok()
}

/// Spawn the task that turns key presses into slot writes and controls
pub fn spawn_input_listener(
    slot: DirectionSlot,
    controls: UnboundedSender<Control>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let handler = InputHandler::new();
        let mut events = EventStream::new();

        while let Some(event) = events.next().await {
            let Ok(Event::Key(key)) = event else {
                continue;
            };

            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if !dispatch(handler.handle_key_event(key), &slot, &controls) {
                break;
            }
        }
    })
}

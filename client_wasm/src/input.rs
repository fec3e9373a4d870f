//! Keyboard input handling

use game_core::InputEvent;

/// Map a `KeyboardEvent.key` value to a core input event.
/// `held` is true on keydown and false on keyup.
pub fn key_to_input(key: &str, held: bool) -> Option<InputEvent> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(InputEvent::TurnLeft(held)),
        "ArrowRight" | "d" | "D" => Some(InputEvent::TurnRight(held)),
        "ArrowUp" | "w" | "W" => Some(InputEvent::ThrustForward(held)),
        "ArrowDown" | "s" | "S" => Some(InputEvent::ThrustBackward(held)),
        " " | "Spacebar" => Some(InputEvent::Fire(held)),
        _ => None,
    }
}

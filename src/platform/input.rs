//! Keyboard intent mapping
//!
//! Arrow keys and A/D both steer the paddle; the legacy "Left"/"Right" key
//! names some browsers still emit are accepted too. Key transitions fold
//! into the two persistent movement flags the tick consumes.

use crate::sim::TickInput;

/// Horizontal movement intent carried by a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    Left,
    Right,
}

/// Map a `KeyboardEvent::key` name to a movement intent
pub fn intent_for_key(key: &str) -> Option<MoveIntent> {
    match key {
        "ArrowRight" | "Right" | "d" | "D" => Some(MoveIntent::Right),
        "ArrowLeft" | "Left" | "a" | "A" => Some(MoveIntent::Left),
        _ => None,
    }
}

/// Fold a key transition into the persistent movement flags
pub fn apply_intent(input: &mut TickInput, intent: MoveIntent, pressed: bool) {
    match intent {
        MoveIntent::Left => input.move_left = pressed,
        MoveIntent::Right => input.move_right = pressed,
    }
}

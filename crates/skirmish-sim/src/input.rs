//! Held keys and latest pointer position, sampled once per step.

use std::collections::HashSet;

use skirmish_core::types::Vector2;

/// Movement key bindings (fixed).
pub const KEY_UP: &str = "w";
pub const KEY_DOWN: &str = "s";
pub const KEY_LEFT: &str = "a";
pub const KEY_RIGHT: &str = "d";

/// Input state mutated by queued commands. Pure state, no game logic.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
    pointer: Vector2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Holding a key (repeat key-down) is idempotent.
    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_lowercase());
    }

    /// Record a key release. Other held keys are unaffected.
    pub fn release(&mut self, key: &str) {
        self.held.remove(&key.to_lowercase());
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(&key.to_lowercase())
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    pub fn set_pointer(&mut self, position: Vector2) {
        self.pointer = position;
    }

    pub fn pointer_position(&self) -> Vector2 {
        self.pointer
    }

    /// Raw (unnormalized) movement request from the WASD keys.
    /// Opposing keys cancel out.
    pub fn movement_axis(&self) -> Vector2 {
        let mut axis = Vector2::ZERO;
        if self.is_held(KEY_UP) {
            axis.y -= 1.0;
        }
        if self.is_held(KEY_DOWN) {
            axis.y += 1.0;
        }
        if self.is_held(KEY_LEFT) {
            axis.x -= 1.0;
        }
        if self.is_held(KEY_RIGHT) {
            axis.x += 1.0;
        }
        axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_key_down_is_deduplicated() {
        let mut input = InputState::new();
        input.press("w");
        input.press("w");
        input.press("W");
        assert_eq!(input.held_count(), 1);

        input.release("w");
        assert!(!input.is_held("w"));
        assert_eq!(input.held_count(), 0);
    }

    #[test]
    fn test_release_one_of_many() {
        let mut input = InputState::new();
        input.press("w");
        input.press("d");
        input.press("Shift");
        input.release("D");
        assert!(input.is_held("w"));
        assert!(!input.is_held("d"));
        assert!(input.is_held("shift"));
    }

    #[test]
    fn test_movement_axis() {
        let mut input = InputState::new();
        assert_eq!(input.movement_axis(), Vector2::ZERO);

        input.press("w");
        input.press("d");
        assert_eq!(input.movement_axis(), Vector2::new(1.0, -1.0));

        input.press("s");
        assert_eq!(input.movement_axis(), Vector2::new(1.0, 0.0));
    }
}

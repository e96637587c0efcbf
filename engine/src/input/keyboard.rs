//! Keyboard Input Module
//!
//! Held-key state tracking for the walk keys and the run modifier.
//! Decoupled from winit so the engine can be driven from tests or any
//! windowing host through generic key codes.

/// Generic key codes for the keys this demo binds, independent of the
/// windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    ShiftLeft,
    ShiftRight,

    // Discrete action keys (handled as press events, not held state)
    K,
    L,
    Space,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which movement keys are currently held.
///
/// Held state is what produces smooth continuous walking; the discrete
/// action keys (rotate, lever, quit) are routed as one-shot events by the
/// host and never appear here.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W - walk forward
    pub forward: bool,
    /// S - walk backward
    pub backward: bool,
    /// A - strafe left
    pub left: bool,
    /// D - strafe right
    pub right: bool,
    /// Shift - run instead of walk
    pub run: bool,
}

impl MovementKeys {
    /// Create a new movement key state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update held state from a key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.forward = pressed;
                true
            }
            KeyCode::S => {
                self.backward = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.run = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any directional key is currently held.
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Check if the run modifier is held.
    pub fn is_running(&self) -> bool {
        self.run
    }

    /// Forward/backward axis (-1, 0, or 1). Opposite keys cancel.
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Right/left axis (-1, 0, or 1). Opposite keys cancel.
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Release every key.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_all_released() {
        let keys = MovementKeys::new();
        assert!(!keys.any_direction());
        assert!(!keys.is_running());
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
    }

    #[test]
    fn test_forward_key() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.forward);
        assert!(keys.any_direction());
        assert_eq!(keys.forward_axis(), 1);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::S, true);
        assert_eq!(keys.forward_axis(), 0);
        // Both are still "held" for the purposes of target speed
        assert!(keys.any_direction());

        keys.handle_key(KeyCode::D, true);
        assert_eq!(keys.right_axis(), 1);
    }

    #[test]
    fn test_run_modifier() {
        let mut keys = MovementKeys::new();
        assert!(!keys.is_running());

        keys.handle_key(KeyCode::ShiftLeft, true);
        assert!(keys.is_running());

        keys.handle_key(KeyCode::ShiftLeft, false);
        assert!(!keys.is_running());
    }

    #[test]
    fn test_action_keys_not_tracked() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::K, true));
        assert!(!keys.handle_key(KeyCode::Space, true));
        assert!(!keys.any_direction());
    }

    #[test]
    fn test_reset() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::ShiftRight, true);
        keys.reset();
        assert!(!keys.any_direction());
        assert!(!keys.is_running());
    }
}

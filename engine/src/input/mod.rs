//! Input Module
//!
//! Platform-agnostic input state for the interaction core. The host
//! (winit binary, or a test) collects raw events and hands the engine one
//! [`FrameInput`] snapshot per frame.

pub mod keyboard;

pub use keyboard::{KeyCode, MovementKeys};

use glam::Vec2;

/// Everything the movement core consumes in one frame: the accumulated
/// pointer delta since the previous frame plus the held-key snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Pointer movement since last frame, in host units (pixels).
    /// `x` turns the view, `y` tilts it.
    pub look_delta: Vec2,
    /// Held movement keys.
    pub keys: MovementKeys,
}

impl FrameInput {
    /// Create an empty frame input (no pointer motion, no keys held).
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame input with only pointer motion.
    pub fn with_look(dx: f32, dy: f32) -> Self {
        Self {
            look_delta: Vec2::new(dx, dy),
            keys: MovementKeys::default(),
        }
    }

    /// Frame input with only held keys.
    pub fn with_keys(keys: MovementKeys) -> Self {
        Self {
            look_delta: Vec2::ZERO,
            keys,
        }
    }
}

//! Camera Module
//!
//! First-person viewpoint control. Movement behavior sits behind the
//! [`MovementProfile`] trait so alternative gaits (a fly camera, a
//! wheelchair profile, a cinematic dolly) can be swapped in by
//! composition; [`HumanCameraController`] is the one shipped profile.

pub mod human;
pub mod smoothing;

pub use human::HumanCameraController;
pub use smoothing::MouseSmoother;

use glam::Vec3;

use crate::input::FrameInput;

/// Look angles in degrees. Pitch is clamped by the active profile; yaw is
/// kept in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Vertical look angle (positive tilts the view down)
    pub pitch: f32,
    /// Horizontal look angle
    pub yaw: f32,
}

/// A movement strategy driving the first-person viewpoint.
///
/// The scene owns exactly one profile, advances it once per frame, and
/// reads back position/orientation snapshots for the render layer. The
/// profile never applies level bounds; the scene clamps the returned
/// position and writes it back via [`set_position`](Self::set_position).
pub trait MovementProfile {
    /// Advance one frame. `dt` is in seconds, non-negative, pre-clamped
    /// by the caller.
    fn update(&mut self, dt: f32, input: &FrameInput);

    /// Current viewpoint position in world space.
    fn position(&self) -> Vec3;

    /// Overwrite the viewpoint position (used after boundary clamping).
    fn set_position(&mut self, position: Vec3);

    /// Current look angles in degrees.
    fn orientation(&self) -> Orientation;
}

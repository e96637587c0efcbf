//! Human Walk Controller
//!
//! First-person camera with a human gait: smoothed mouse look, an
//! accelerating/decelerating walk with a faster stop than start, and a
//! head bob tied to distance covered rather than wall-clock time.
//!
//! Angles are kept in degrees. Yaw wraps into [0, 360); pitch is hard
//! clamped to +/-89 degrees so the view can never flip over the pole.

use std::f32::consts::PI;

use glam::Vec3;

use crate::camera::smoothing::MouseSmoother;
use crate::camera::{MovementProfile, Orientation};
use crate::input::FrameInput;

/// Walk speed in units per second
pub const WALK_SPEED: f32 = 1.5;

/// Run speed in units per second
pub const RUN_SPEED: f32 = 4.0;

/// Acceleration in units per second squared
pub const MAX_ACCELERATION: f32 = 4.0;

/// Deceleration multiplier applied to [`MAX_ACCELERATION`] when slowing.
/// Stopping is quicker than starting so releasing a key feels crisp.
pub const DECELERATION_FACTOR: f32 = 2.5;

/// Below this speed the controller snaps to a full stop instead of
/// sliding on a residual fraction of a unit per second.
pub const STOP_THRESHOLD: f32 = 0.05;

/// Speed above which the gait counts as "moving" and the head bob runs.
pub const MOVING_THRESHOLD: f32 = 0.1;

/// Head bob amplitude in world units (2.5 cm).
pub const BOB_AMPLITUDE: f32 = 0.025;

/// Head bob cycles per unit of distance walked.
pub const BOB_FREQUENCY: f32 = 2.0;

/// Fraction of the vertical bob offset retained each idle frame while
/// the view settles back to eye height.
pub const SETTLE_RETENTION: f32 = 0.8;

/// Pitch limit in degrees.
pub const MAX_PITCH: f32 = 89.0;

/// Eye height above the floor in world units.
pub const EYE_HEIGHT: f32 = 1.7;

/// Mouse sensitivity in degrees per pixel of pointer motion.
pub const MOUSE_SENSITIVITY: f32 = 0.5;

/// First-person controller with human movement dynamics.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = HumanCameraController::new();
///
/// // Each frame, with dt in seconds:
/// camera.update(dt, &frame_input);
///
/// // Read back the viewpoint for rendering
/// let pos = camera.position();
/// let look = camera.orientation();
/// ```
#[derive(Debug, Clone)]
pub struct HumanCameraController {
    /// Camera position in world space
    position: Vec3,
    /// Horizontal look angle in degrees, wrapped into [0, 360)
    yaw: f32,
    /// Vertical look angle in degrees, clamped to +/-[`MAX_PITCH`]
    pitch: f32,
    /// Degrees of rotation per pixel of pointer motion
    sensitivity: f32,
    /// Pointer smoothing state
    smoother: MouseSmoother,

    /// Walk speed in units/s
    walk_speed: f32,
    /// Run speed in units/s
    run_speed: f32,
    /// Acceleration in units/s^2
    max_acceleration: f32,
    /// Current planar speed in units/s
    current_speed: f32,
    /// World-space velocity. Reserved for momentum transfer (knockback,
    /// moving platforms); the planar walk integrates `current_speed`
    /// directly.
    velocity: Vec3,

    /// Head bob phase in radians
    bob_phase: f32,
    /// Eye height the view settles back to while standing
    base_height: f32,
    /// True while current speed exceeds the moving threshold
    is_moving: bool,
}

impl Default for HumanCameraController {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, EYE_HEIGHT, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: MOUSE_SENSITIVITY,
            smoother: MouseSmoother::new(),
            walk_speed: WALK_SPEED,
            run_speed: RUN_SPEED,
            max_acceleration: MAX_ACCELERATION,
            current_speed: 0.0,
            velocity: Vec3::ZERO,
            bob_phase: 0.0,
            base_height: EYE_HEIGHT,
            is_moving: false,
        }
    }
}

impl HumanCameraController {
    /// Create a controller with default tuning, standing at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with custom speeds and acceleration.
    pub fn with_tuning(walk_speed: f32, run_speed: f32, max_acceleration: f32) -> Self {
        Self {
            walk_speed,
            run_speed,
            max_acceleration,
            ..Default::default()
        }
    }

    /// Current planar speed in units/s.
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Reserved momentum vector (currently always zero).
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// True while the gait is in motion (speed above the bob threshold).
    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// Walk speed in units/s.
    pub fn walk_speed(&self) -> f32 {
        self.walk_speed
    }

    /// Run speed in units/s.
    pub fn run_speed(&self) -> f32 {
        self.run_speed
    }

    /// Eye height the view settles to while standing.
    pub fn base_height(&self) -> f32 {
        self.base_height
    }

    /// Set the eye height the view settles to while standing. Does not
    /// teleport the current position; the settle easing converges there.
    pub fn set_base_height(&mut self, height: f32) {
        self.base_height = height;
    }

    /// Mouse sensitivity in degrees per pixel.
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Set mouse sensitivity in degrees per pixel.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Set yaw/pitch directly (degrees); angles are re-clamped/wrapped.
    pub fn set_orientation(&mut self, pitch: f32, yaw: f32) {
        self.pitch = pitch;
        self.yaw = yaw;
        self.clamp_angles();
    }

    /// Planar forward direction derived from yaw (y component is zero).
    pub fn forward(&self) -> Vec3 {
        let yaw_rad = self.yaw.to_radians();
        Vec3::new(yaw_rad.sin(), 0.0, -yaw_rad.cos())
    }

    /// Planar right direction derived from yaw (y component is zero).
    pub fn right(&self) -> Vec3 {
        let yaw_rad = self.yaw.to_radians();
        Vec3::new(yaw_rad.cos(), 0.0, yaw_rad.sin())
    }

    fn clamp_angles(&mut self) {
        if self.pitch > MAX_PITCH {
            self.pitch = MAX_PITCH;
        }
        if self.pitch < -MAX_PITCH {
            self.pitch = -MAX_PITCH;
        }

        while self.yaw >= 360.0 {
            self.yaw -= 360.0;
        }
        while self.yaw < 0.0 {
            self.yaw += 360.0;
        }
    }

    fn update_orientation(&mut self, input: &FrameInput) {
        let scaled_dx = input.look_delta.x * self.sensitivity;
        let scaled_dy = input.look_delta.y * self.sensitivity;

        if let Some((yaw_delta, pitch_delta)) = self.smoother.sample(scaled_dx, scaled_dy) {
            self.yaw += yaw_delta;
            self.pitch += pitch_delta;
            self.clamp_angles();
        }
    }

    fn update_speed(&mut self, dt: f32, input: &FrameInput) {
        let target_speed = if input.keys.any_direction() {
            if input.keys.is_running() {
                self.run_speed
            } else {
                self.walk_speed
            }
        } else {
            0.0
        };

        if target_speed > self.current_speed {
            self.current_speed += self.max_acceleration * dt;
            if self.current_speed > target_speed {
                self.current_speed = target_speed;
            }
        } else if target_speed < self.current_speed {
            self.current_speed -= self.max_acceleration * DECELERATION_FACTOR * dt;
            if self.current_speed < STOP_THRESHOLD {
                self.current_speed = 0.0;
            }
        }

        self.is_moving = self.current_speed > MOVING_THRESHOLD;
    }
}

impl MovementProfile for HumanCameraController {
    /// Advance one frame: look, gait speed, planar displacement, head bob.
    ///
    /// `dt` must be non-negative and pre-clamped by the caller; the
    /// controller itself never errors, degenerate input produces no
    /// movement.
    fn update(&mut self, dt: f32, input: &FrameInput) {
        self.update_orientation(input);
        self.update_speed(dt, input);

        let forward = self.forward();
        let right = self.right();

        let mut move_dir = forward * input.keys.forward_axis() as f32
            + right * input.keys.right_axis() as f32;

        let length = move_dir.length();
        if length > 0.001 {
            move_dir /= length;
        }

        let distance = self.current_speed * dt;
        self.position.x += move_dir.x * distance;
        self.position.z += move_dir.z * distance;

        if self.is_moving {
            // Phase advances with ground covered, so the footstep rhythm
            // tracks stride, not framerate.
            self.bob_phase += distance * BOB_FREQUENCY * PI;

            let intensity = self.current_speed / self.walk_speed;
            let vertical = self.bob_phase.sin() * BOB_AMPLITUDE * intensity;
            self.position.y = self.base_height + vertical;
        } else {
            // Ease back to eye height instead of snapping.
            self.position.y =
                self.base_height + (self.position.y - self.base_height) * SETTLE_RETENTION;
            self.bob_phase = 0.0;
        }
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn orientation(&self) -> Orientation {
        Orientation {
            pitch: self.pitch,
            yaw: self.yaw,
        }
    }
}

//! Camera Tests - Orientation Invariants and Walk Dynamics
//!
//! Integration tests for the human camera profile and the room boundary
//! clamp, driven through the same per-frame API the scene uses.

use glam::Vec3;

use artspace_engine::camera::human::{MAX_PITCH, WALK_SPEED};
use artspace_engine::camera::{HumanCameraController, MovementProfile};
use artspace_engine::input::{FrameInput, KeyCode, MovementKeys};
use artspace_engine::physics::{RoomBounds, clamp_to_room};

fn held(keys: &[KeyCode]) -> MovementKeys {
    let mut state = MovementKeys::new();
    for &key in keys {
        state.handle_key(key, true);
    }
    state
}

// ============================================================================
// Orientation invariants
// ============================================================================

#[test]
fn test_orientation_invariants_hold_for_any_delta_sequence() {
    // A deliberately nasty pointer trace: spikes, sign flips, zeros
    let deltas: [(f32, f32); 12] = [
        (0.0, 0.0),
        (5000.0, -3000.0),
        (-12000.0, 9000.0),
        (0.1, 0.1),
        (0.0, 0.0),
        (-0.1, -0.1),
        (250000.0, 250000.0),
        (-250000.0, -250000.0),
        (13.7, -2.4),
        (0.0, 1000000.0),
        (0.0, -1000000.0),
        (360.0, 360.0),
    ];

    let mut camera = HumanCameraController::new();
    for _ in 0..10 {
        for &(dx, dy) in &deltas {
            camera.update(0.016, &FrameInput::with_look(dx, dy));
            let look = camera.orientation();
            assert!(
                (-MAX_PITCH..=MAX_PITCH).contains(&look.pitch),
                "pitch {} escaped the clamp",
                look.pitch
            );
            assert!(
                (0.0..360.0).contains(&look.yaw),
                "yaw {} escaped [0, 360)",
                look.yaw
            );
        }
    }
}

#[test]
fn test_smoothing_trails_raw_input() {
    // One big flick: the smoothed first frame must rotate less than the
    // raw sample would have
    let mut camera = HumanCameraController::new();
    let raw_degrees = 100.0 * camera.sensitivity();
    camera.update(0.016, &FrameInput::with_look(100.0, 0.0));
    let yaw = camera.orientation().yaw;
    assert!(yaw > 0.0);
    assert!(yaw < raw_degrees);
}

// ============================================================================
// Walk dynamics
// ============================================================================

#[test]
fn test_speed_ramp_reaches_walk_speed_in_four_tenths_steps() {
    // From rest at 4.0 u/s^2 with dt = 0.1: 0.4 per step, walk speed 1.5
    // is reached on the fourth step and never overshot
    let mut camera = HumanCameraController::new();
    let input = FrameInput::with_keys(held(&[KeyCode::W]));

    let expected = [0.4, 0.8, 1.2, 1.5, 1.5];
    for &target in &expected {
        camera.update(0.1, &input);
        assert!(
            (camera.current_speed() - target).abs() < 1e-5,
            "speed {} != {}",
            camera.current_speed(),
            target
        );
    }
}

#[test]
fn test_displacement_scales_with_speed() {
    let mut camera = HumanCameraController::new();
    let input = FrameInput::with_keys(held(&[KeyCode::W]));

    // Reach steady walk speed, then measure one second of travel
    for _ in 0..200 {
        camera.update(0.016, &input);
    }
    let before = camera.position();
    for _ in 0..100 {
        camera.update(0.01, &input);
    }
    let travelled = (camera.position() - before).length();
    // One second at walk speed, ignoring the tiny vertical bob component
    assert!((travelled - WALK_SPEED).abs() < 0.1);
}

#[test]
fn test_stopping_has_no_residual_slide() {
    let mut camera = HumanCameraController::new();
    let walking = FrameInput::with_keys(held(&[KeyCode::W]));
    let idle = FrameInput::new();

    for _ in 0..100 {
        camera.update(0.016, &walking);
    }
    for _ in 0..60 {
        camera.update(0.016, &idle);
    }
    assert_eq!(camera.current_speed(), 0.0);

    let before = camera.position();
    camera.update(0.016, &idle);
    let after = camera.position();
    assert_eq!(before.x, after.x);
    assert_eq!(before.z, after.z);
}

// ============================================================================
// Boundary constraint
// ============================================================================

#[test]
fn test_wall_clamp_reference_values() {
    // Room width 30 (half 15), wall offset 0.2: x = 14.95 clamps to 14.8
    let bounds = RoomBounds::new(30.0, 16.0, 30.0);
    let clamped = clamp_to_room(Vec3::new(14.95, 1.7, 0.0), &bounds, 0.2, 0.1, 1.7);
    assert!((clamped.x - 14.8).abs() < 1e-6);
}

#[test]
fn test_clamp_holds_for_arbitrary_candidates() {
    let bounds = RoomBounds::new(30.0, 16.0, 30.0);
    let wall_offset = 0.2;
    let limit = 15.0 - wall_offset;

    let mut candidate = Vec3::new(-40.0, -40.0, -40.0);
    // Sweep a grid of positions well outside and inside the room
    while candidate.x <= 40.0 {
        candidate.y = -40.0;
        while candidate.y <= 40.0 {
            candidate.z = -40.0;
            while candidate.z <= 40.0 {
                let clamped = clamp_to_room(candidate, &bounds, wall_offset, 0.1, 1.7);
                assert!(clamped.x >= -limit && clamped.x <= limit);
                assert!(clamped.z >= -limit && clamped.z <= limit);
                assert!(clamped.y >= -8.0 + 1.7 + 0.1);
                candidate.z += 13.0;
            }
            candidate.y += 13.0;
        }
        candidate.x += 13.0;
    }
}

#[test]
fn test_walking_into_wall_stops_at_offset() {
    let bounds = RoomBounds::new(30.0, 16.0, 30.0);
    let mut camera = HumanCameraController::new();
    camera.set_position(Vec3::new(0.0, 1.7, 0.0));
    let input = FrameInput::with_keys(held(&[KeyCode::W, KeyCode::ShiftLeft]));

    // Drive the camera and clamp after every step, the way the scene does
    for _ in 0..2000 {
        camera.update(0.016, &input);
        let clamped = clamp_to_room(camera.position(), &bounds, 0.2, 0.1, 1.7);
        camera.set_position(clamped);
    }
    assert!((camera.position().z - (-14.8)).abs() < 1e-4);
}

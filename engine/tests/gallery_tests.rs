//! Gallery Tests - Puzzle, Lever, and Scene Round-Trips
//!
//! Integration tests driving the full scene the way the host binary
//! does: per-frame updates plus discrete rotate/lever events.

use artspace_engine::game::config::GalleryConfig;
use artspace_engine::game::lever::{
    ERROR_DISPLAY_SECONDS, LEVER_OFF_ANGLE, Lever, OutcomeLight, RESET_DELAY_SECONDS,
};
use artspace_engine::game::puzzle::RotationTracker;
use artspace_engine::game::scenes::gallery_scene::WIN_EXIT_SECONDS;
use artspace_engine::game::{
    GalleryScene, RotateDirection, RotateOutcome, SceneStatus, SoundCue,
};
use artspace_engine::input::FrameInput;

fn scene_with(rotations: Vec<f32>) -> GalleryScene {
    let mut scene = GalleryScene::with_initial_rotations(GalleryConfig::default(), rotations);
    scene.update(0.016, &FrameInput::new());
    scene
}

// ============================================================================
// Rotation tracking
// ============================================================================

#[test]
fn test_rotation_wraps_through_zero() {
    // 350 degrees plus one counterclockwise step lands on 5
    let mut tracker = RotationTracker::from_initial(vec![350.0]);
    tracker.rotate(0, 15.0);
    assert!((tracker.angle(0).unwrap() - 5.0).abs() < 1e-4);
}

#[test]
fn test_solved_requires_every_artwork_aligned() {
    assert!(RotationTracker::from_initial(vec![0.0, 0.0, 0.0]).is_solved());
    assert!(!RotationTracker::from_initial(vec![0.0, 0.5, 0.0]).is_solved());
}

#[test]
fn test_solving_by_stepping_back_to_zero() {
    let mut scene = scene_with(vec![345.0, 0.0, 0.0]);
    assert!(!scene.tracker.is_solved());

    // The first artwork is the closest from spawn; one counterclockwise
    // step brings 345 back to 0
    let outcome = scene.on_rotate_command(RotateDirection::CounterClockwise);
    assert_eq!(outcome, RotateOutcome::Applied);
    assert!(scene.tracker.is_solved());
}

// ============================================================================
// Lever timing (wrong-answer cycle)
// ============================================================================

#[test]
fn test_wrong_pull_error_and_reset_timeline() {
    let mut lever = Lever::new();
    lever.activate(false);
    assert!(lever.is_showing_error());

    let dt = 0.1;
    let mut elapsed = 0.0;
    let mut reset_seen_at = None;

    while elapsed < 3.0 {
        lever.update(dt);
        elapsed += dt;

        // The arm re-arms toward OFF once the reset delay passes
        if reset_seen_at.is_none() && elapsed >= RESET_DELAY_SECONDS + 1e-6 {
            assert!(lever.is_animating());
            reset_seen_at = Some(elapsed);
        }
        // The red bulb goes dark after the error display window
        if elapsed >= ERROR_DISPLAY_SECONDS + dt {
            assert!(!lever.is_showing_error(), "error still lit at {elapsed}");
        }
    }

    assert!(reset_seen_at.is_some());
    assert_eq!(lever.current_angle(), LEVER_OFF_ANGLE);
    assert_eq!(lever.outcome_light(), OutcomeLight::Off);
    assert!(lever.activation_lit());
}

// ============================================================================
// Scene round-trips
// ============================================================================

#[test]
fn test_full_solve_and_win_round_trip() {
    // Two artworks start off-vertical
    let mut scene = scene_with(vec![30.0, 345.0, 0.0]);
    scene.drain_sound_cues();

    // A premature pull fails
    scene.on_activate_lever();
    assert!(!scene.is_won());
    assert_eq!(scene.drain_sound_cues(), vec![SoundCue::Wrong]);

    // Fix artwork 0 (closest from spawn): two clockwise steps
    assert_eq!(
        scene.on_rotate_command(RotateDirection::Clockwise),
        RotateOutcome::Applied
    );
    assert_eq!(
        scene.on_rotate_command(RotateDirection::Clockwise),
        RotateOutcome::Applied
    );
    assert!((scene.tracker.angle(0).unwrap()).abs() < 1e-4);

    // Artwork 1 still blocks the win
    scene.on_activate_lever();
    assert!(!scene.is_won());
    scene.drain_sound_cues();

    // Walking is not simulated here; nudge the tracker the same way one
    // more counterclockwise step would
    scene.tracker.rotate(1, 15.0);
    assert!(scene.tracker.is_solved());

    scene.on_activate_lever();
    assert!(scene.is_won());
    assert_eq!(scene.drain_sound_cues(), vec![SoundCue::GameOver]);

    // The celebration runs its course and the scene reports done
    let idle = FrameInput::new();
    let steps = (WIN_EXIT_SECONDS / 0.1) as usize + 1;
    for _ in 0..steps {
        scene.update(0.1, &idle);
    }
    assert_eq!(scene.status(), SceneStatus::Exited);

    // A dead scene stays dead
    scene.update(0.1, &idle);
    assert_eq!(scene.status(), SceneStatus::Exited);
}

#[test]
fn test_out_of_range_rotation_is_advisory_noop() {
    let mut config = GalleryConfig::default();
    config.interaction_distance = 1.0;
    let mut scene = GalleryScene::with_initial_rotations(config, vec![15.0, 30.0, 45.0]);
    scene.update(0.016, &FrameInput::new());

    assert_eq!(
        scene.on_rotate_command(RotateDirection::CounterClockwise),
        RotateOutcome::TooFar
    );
    // Nothing moved
    assert!((scene.tracker.angle(0).unwrap() - 15.0).abs() < 1e-4);
    assert!((scene.tracker.angle(1).unwrap() - 30.0).abs() < 1e-4);
    assert!((scene.tracker.angle(2).unwrap() - 45.0).abs() < 1e-4);
}

#[test]
fn test_won_state_survives_everything() {
    let mut scene = scene_with(vec![0.0, 0.0, 0.0]);
    scene.on_activate_lever();
    assert!(scene.is_won());
    scene.drain_sound_cues();

    // Spam every command; no cue, no state escape
    for _ in 0..10 {
        scene.on_activate_lever();
        scene.on_rotate_command(RotateDirection::Clockwise);
    }
    assert!(scene.is_won());
    assert_eq!(scene.lever.outcome_light(), OutcomeLight::Green);
    assert!(scene.drain_sound_cues().is_empty());
}

#[test]
fn test_closest_artwork_tracks_movement() {
    let mut scene = scene_with(vec![0.0, 0.0, 0.0]);
    // From spawn (0, _, 3) the first north-wall artwork at x=0 is nearest
    let (first, _) = scene.closest_artwork().unwrap();
    assert_eq!(first.0, 0);
}

//! GalleryScene: high-level composition of the demo's systems.
//!
//! Owns the camera profile, room bounds, artworks, rotation tracking, and
//! the answer lever. Its [`update`](GalleryScene::update) method is the
//! single entry point for per-frame logic; discrete key events arrive
//! through [`on_rotate_command`](GalleryScene::on_rotate_command) and
//! [`on_activate_lever`](GalleryScene::on_activate_lever). No GPU or
//! audio imports here: the host reads positions, angles, bulb states, and
//! sound cues back out and does its own presentation.

use glam::Vec3;
use log::info;
use rand::Rng;

use crate::camera::{HumanCameraController, MovementProfile, Orientation};
use crate::game::artwork::{Artwork, ArtworkId, Gallery};
use crate::game::audio::SoundCue;
use crate::game::config::GalleryConfig;
use crate::game::lever::Lever;
use crate::game::puzzle::RotationTracker;
use crate::input::FrameInput;
use crate::physics::{RoomBounds, clamp_to_room};

/// Frame delta ceiling, seconds. A debugger pause or window drag must not
/// turn into one giant simulation step.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Win celebration spin rate, degrees per second.
pub const WIN_SPIN_RATE: f32 = 180.0;

/// Cumulative spin (three full turns) before the artworks lock back to
/// vertical, degrees.
pub const WIN_SPIN_TOTAL: f32 = 1080.0;

/// Seconds between ambient light re-randomizations during the win
/// celebration.
pub const WIN_FLASH_INTERVAL: f32 = 0.3;

/// Seconds spent in the won state before the scene reports itself done.
pub const WIN_EXIT_SECONDS: f32 = 5.0;

/// Ambient light outside the celebration.
pub const DEFAULT_AMBIENT: [f32; 3] = [0.2, 0.2, 0.2];

/// Distance change that warrants a fresh closest-artwork log line.
const CLOSEST_LOG_DELTA: f32 = 0.05;

/// Spawn point: a couple of units back from the room center, at floor
/// level so the first frames ease the view up to eye height.
const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

/// Direction of a discrete artwork rotation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

/// What happened to a rotate command. `TooFar` is advisory, for UI
/// feedback; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateOutcome {
    /// The closest artwork turned one step
    Applied,
    /// No artwork within interaction range; nothing changed
    TooFar,
}

/// Whether the scene is still running or has finished its win sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneStatus {
    Running,
    Exited,
}

/// Timers for the win celebration: the simultaneous artwork spin, the
/// ambient light flicker, and the overall exit countdown. All three run
/// independently.
#[derive(Debug, Clone)]
struct WinSequence {
    spin_active: bool,
    total_rotation: f32,
    flash_timer: f32,
    elapsed: f32,
    ambient: [f32; 3],
}

impl WinSequence {
    fn new() -> Self {
        Self {
            spin_active: true,
            total_rotation: 0.0,
            flash_timer: 0.0,
            elapsed: 0.0,
            ambient: DEFAULT_AMBIENT,
        }
    }
}

/// Complete gallery scene composing camera, bounds, puzzle, and lever.
///
/// Created once from [`GalleryConfig`]. Call
/// [`update`](GalleryScene::update) each frame with the delta time and
/// input snapshot; forward discrete key events as they arrive. Read the
/// fields and accessors for presentation data.
pub struct GalleryScene {
    // -- Config --
    pub config: GalleryConfig,

    // -- Player viewpoint --
    camera: Box<dyn MovementProfile>,
    bounds: RoomBounds,

    // -- Puzzle --
    pub gallery: Gallery,
    pub tracker: RotationTracker,
    pub lever: Lever,

    // -- Interaction gating --
    closest: Option<(ArtworkId, f32)>,

    // -- Win celebration --
    win: Option<WinSequence>,
    status: SceneStatus,

    // -- Outbound notifications --
    sound_events: Vec<SoundCue>,
}

impl GalleryScene {
    /// Create a scene with every artwork scrambled to a random multiple
    /// of the rotation step.
    pub fn new(config: GalleryConfig) -> Self {
        let mut rng = rand::rng();
        let slots = config.rotation_slots();
        let initial: Vec<f32> = config
            .artworks
            .iter()
            .map(|_| rng.random_range(0..slots) as f32 * config.rotation_step)
            .collect();
        Self::with_initial_rotations(config, initial)
    }

    /// Create a scene with explicit starting rotations (deterministic
    /// setup for tests and replays). Missing entries default to 0.
    pub fn with_initial_rotations(config: GalleryConfig, mut initial: Vec<f32>) -> Self {
        initial.resize(config.artworks.len(), 0.0);

        let mut camera =
            HumanCameraController::with_tuning(config.walk_speed, config.run_speed, config.max_acceleration);
        camera.set_sensitivity(config.mouse_sensitivity);
        camera.set_base_height(config.eye_height);
        camera.set_position(SPAWN_POSITION);

        let mut gallery = Gallery::new();
        for (art, &angle) in config.artworks.iter().zip(initial.iter()) {
            let mut artwork = Artwork::new(
                art.name.clone(),
                Vec3::from_array(art.position),
                art.placement,
            );
            artwork.set_render_rotation(angle);
            gallery.add(artwork);
        }

        for (art, angle) in config.artworks.iter().zip(initial.iter()) {
            info!("initial rotation: {} at {:.0} degrees", art.name, angle);
        }

        let bounds = RoomBounds::new(config.room.width, config.room.height, config.room.depth);

        Self {
            config,
            camera: Box::new(camera),
            bounds,
            gallery,
            tracker: RotationTracker::from_initial(initial),
            lever: Lever::new(),
            closest: None,
            win: None,
            status: SceneStatus::Running,
            sound_events: vec![SoundCue::GameStart],
        }
    }

    /// Advance the whole scene one frame. `delta_time` is clamped to
    /// [`MAX_FRAME_DELTA`]; call at most once per host frame.
    pub fn update(&mut self, delta_time: f32, input: &FrameInput) {
        if self.status == SceneStatus::Exited {
            return;
        }
        let dt = delta_time.clamp(0.0, MAX_FRAME_DELTA);

        self.camera.update(dt, input);

        let clamped = clamp_to_room(
            self.camera.position(),
            &self.bounds,
            self.config.wall_offset,
            self.config.floor_offset,
            self.config.eye_height,
        );
        self.camera.set_position(clamped);

        self.update_closest_artwork();

        self.lever.update(dt);

        if self.win.is_some() {
            self.advance_win_sequence(dt);
        }
    }

    /// Rotate the closest artwork one step in the given direction.
    ///
    /// Gated on interaction distance: out of range the command is a
    /// no-op and the outcome says why.
    pub fn on_rotate_command(&mut self, direction: RotateDirection) -> RotateOutcome {
        let delta = match direction {
            RotateDirection::CounterClockwise => self.config.rotation_step,
            RotateDirection::Clockwise => -self.config.rotation_step,
        };

        let Some((id, distance)) = self.closest else {
            info!("too far from artwork to rotate: none in range");
            return RotateOutcome::TooFar;
        };
        if distance > self.config.interaction_distance {
            info!("too far from artwork to rotate, distance: {distance:.2} units");
            return RotateOutcome::TooFar;
        }

        if self.tracker.rotate(id.0, delta) {
            let angle = self.tracker.angle(id.0).unwrap_or(0.0);
            if let Some(artwork) = self.gallery.get_mut(id) {
                artwork.set_render_rotation(angle);
            }
        }
        RotateOutcome::Applied
    }

    /// Pull the answer lever. Evaluates the win predicate at pull time,
    /// drives the lever state machine, and emits the outcome sound cue.
    /// Once won this is a no-op; the terminal state cannot be replayed.
    pub fn on_activate_lever(&mut self) {
        if self.lever.has_won() {
            return;
        }

        let solved = self.tracker.is_solved();
        self.lever.activate(solved);

        if solved {
            info!("correct answer: every artwork is aligned");
            info!("YOU WIN");
            self.sound_events.push(SoundCue::GameOver);
            self.win = Some(WinSequence::new());
        } else {
            info!("incorrect: not every artwork is aligned");
            self.sound_events.push(SoundCue::Wrong);
        }
    }

    /// Viewpoint position snapshot for the render layer.
    pub fn position(&self) -> Vec3 {
        self.camera.position()
    }

    /// Viewpoint look angles for the render layer.
    pub fn orientation(&self) -> Orientation {
        self.camera.orientation()
    }

    /// Running, or finished after the win sequence.
    pub fn status(&self) -> SceneStatus {
        self.status
    }

    /// The artwork currently gating interaction, with its distance.
    pub fn closest_artwork(&self) -> Option<(ArtworkId, f32)> {
        self.closest
    }

    /// True once the winning pull has latched.
    pub fn is_won(&self) -> bool {
        self.lever.has_won()
    }

    /// Ambient light for the render layer; flickers during the win
    /// celebration.
    pub fn ambient_light(&self) -> [f32; 3] {
        match &self.win {
            Some(win) => win.ambient,
            None => DEFAULT_AMBIENT,
        }
    }

    /// Take all sound cues emitted since the last drain.
    pub fn drain_sound_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sound_events)
    }

    /// Recompute the closest artwork by straight-line distance. Ties go
    /// to the first-hung artwork. The stored selection (and the log) only
    /// refresh when the winner changes or its distance moved noticeably.
    fn update_closest_artwork(&mut self) {
        if self.gallery.is_empty() {
            return;
        }
        let camera_pos = self.camera.position();

        let mut best: Option<(ArtworkId, f32)> = None;
        for (id, artwork) in self.gallery.iter() {
            let distance = (artwork.position() - camera_pos).length();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((id, distance)),
            }
        }

        let Some((new_id, new_distance)) = best else {
            return;
        };
        let changed = match self.closest {
            Some((old_id, old_distance)) => {
                new_id != old_id || (new_distance - old_distance).abs() > CLOSEST_LOG_DELTA
            }
            None => true,
        };

        if changed {
            self.closest = Some((new_id, new_distance));
            let name = self
                .gallery
                .get(new_id)
                .map(|a| a.name.as_str())
                .unwrap_or("unknown");
            info!("closest artwork: {name}, distance: {new_distance:.2} units");
        }
    }

    /// Advance the three win timers: spin, flicker, exit.
    fn advance_win_sequence(&mut self, dt: f32) {
        let Some(win) = self.win.as_mut() else {
            return;
        };

        win.elapsed += dt;
        win.flash_timer += dt;

        if win.spin_active {
            let amount = WIN_SPIN_RATE * dt;
            win.total_rotation += amount;
            self.tracker.rotate_all(amount);
            for (id, artwork) in self.gallery.iter_mut() {
                if let Some(angle) = self.tracker.angle(id.0) {
                    artwork.set_render_rotation(angle);
                }
            }

            if win.total_rotation >= WIN_SPIN_TOTAL {
                win.spin_active = false;
                self.tracker.zero_all();
                for (_, artwork) in self.gallery.iter_mut() {
                    artwork.set_render_rotation(0.0);
                }
            }
        }

        if win.flash_timer >= WIN_FLASH_INTERVAL {
            win.flash_timer = 0.0;
            let mut rng = rand::rng();
            win.ambient = [rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>()];
        }

        if win.elapsed >= WIN_EXIT_SECONDS {
            info!("game completed successfully");
            self.status = SceneStatus::Exited;
        }
    }
}

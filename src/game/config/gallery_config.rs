//! Gallery Configuration
//!
//! Room geometry, camera tuning, gameplay thresholds, and the artwork
//! layout, as one serializable struct. `Default` reproduces the shipped
//! demo room so the binary runs without any file on disk; a JSON file can
//! override everything. Loaded values are clamped into sane ranges rather
//! than rejected.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::game::artwork::WallPlacement;

/// Clamp ranges for tunable values.
pub const MIN_MOUSE_SENSITIVITY: f32 = 0.05;
pub const MAX_MOUSE_SENSITIVITY: f32 = 0.5;
pub const MIN_WALK_SPEED: f32 = 1.0;
pub const MAX_WALK_SPEED: f32 = 10.0;
pub const MIN_INTERACTION_DISTANCE: f32 = 0.5;
pub const MAX_INTERACTION_DISTANCE: f32 = 50.0;
pub const MIN_ROTATION_STEP: f32 = 5.0;
pub const MAX_ROTATION_STEP: f32 = 180.0;

/// Interior room dimensions, world units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoomConfig {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 16.0,
            depth: 30.0,
        }
    }
}

/// Placement of one artwork in the level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkConfig {
    /// Display name used in log lines
    pub name: String,
    /// Frame center in world space
    pub position: [f32; 3],
    /// Wall the frame hangs on
    pub placement: WallPlacement,
}

/// Complete demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Room interior dimensions
    pub room: RoomConfig,
    /// Keep-out distance from each wall, world units
    pub wall_offset: f32,
    /// Extra clearance above the computed floor, world units
    pub floor_offset: f32,
    /// Eye height above the floor, world units
    pub eye_height: f32,

    /// Degrees of look rotation per pixel of pointer motion
    pub mouse_sensitivity: f32,
    /// Walk speed, units/s
    pub walk_speed: f32,
    /// Run speed, units/s
    pub run_speed: f32,
    /// Walk acceleration, units/s^2
    pub max_acceleration: f32,

    /// Degrees applied per rotate command
    pub rotation_step: f32,
    /// Maximum distance at which rotate commands reach an artwork
    pub interaction_distance: f32,

    /// The artworks hung in the room
    pub artworks: Vec<ArtworkConfig>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            room: RoomConfig::default(),
            wall_offset: 0.2,
            floor_offset: 0.1,
            eye_height: 1.7,
            mouse_sensitivity: 0.5,
            walk_speed: 1.5,
            run_speed: 4.0,
            max_acceleration: 4.0,
            rotation_step: 15.0,
            interaction_distance: 28.0,
            artworks: vec![
                ArtworkConfig {
                    name: "Vermilion Study".into(),
                    position: [0.0, 1.0, -14.9],
                    placement: WallPlacement::North,
                },
                ArtworkConfig {
                    name: "Static Bloom".into(),
                    position: [-3.0, 1.0, -14.9],
                    placement: WallPlacement::North,
                },
                ArtworkConfig {
                    name: "Orrery at Dusk".into(),
                    position: [5.0, 1.0, -14.9],
                    placement: WallPlacement::North,
                },
            ],
        }
    }
}

impl GalleryConfig {
    /// Load a configuration from a JSON file, clamping tunables into
    /// range on the way in.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading gallery config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing gallery config {}", path.display()))?;
        Ok(config.validated())
    }

    /// Clamp every tunable into its allowed range.
    pub fn validated(mut self) -> Self {
        self.mouse_sensitivity = self
            .mouse_sensitivity
            .clamp(MIN_MOUSE_SENSITIVITY, MAX_MOUSE_SENSITIVITY);
        self.walk_speed = self.walk_speed.clamp(MIN_WALK_SPEED, MAX_WALK_SPEED);
        // Running slower than walking is never intended
        self.run_speed = self.run_speed.max(self.walk_speed);
        self.interaction_distance = self
            .interaction_distance
            .clamp(MIN_INTERACTION_DISTANCE, MAX_INTERACTION_DISTANCE);
        self.rotation_step = self.rotation_step.clamp(MIN_ROTATION_STEP, MAX_ROTATION_STEP);
        self
    }

    /// Number of evenly spaced rotation slots a full turn divides into.
    pub fn rotation_slots(&self) -> u32 {
        (360.0 / self.rotation_step).round().max(1.0) as u32
    }
}

//! Scenes Module
//!
//! One scene for this demo: the gallery room.

pub mod gallery_scene;

pub use gallery_scene::{
    GalleryScene, RotateDirection, RotateOutcome, SceneStatus, DEFAULT_AMBIENT, MAX_FRAME_DELTA,
    WIN_EXIT_SECONDS, WIN_FLASH_INTERVAL, WIN_SPIN_RATE, WIN_SPIN_TOTAL,
};

//! Game Module
//!
//! Gallery-specific systems built on top of the engine: the artworks and
//! their rotation puzzle, the answer lever, sound cues, configuration,
//! and the scene that orchestrates them each frame.

pub mod artwork;
pub mod audio;
pub mod config;
pub mod lever;
pub mod puzzle;
pub mod scenes;

pub use artwork::{Artwork, ArtworkId, Gallery, WallPlacement};
pub use audio::{LogSink, NullSink, SoundCue, SoundSink};
pub use config::{ArtworkConfig, GalleryAction, GalleryConfig, InputConfig, RoomConfig};
pub use lever::{Lever, OutcomeLight};
pub use puzzle::{RotationTracker, normalize_angle};
pub use scenes::{GalleryScene, RotateDirection, RotateOutcome, SceneStatus};

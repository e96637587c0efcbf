//! ArtSpace Engine Library
//!
//! The interaction core of a small first-person gallery puzzle: a player
//! walks a room, rotates wall-mounted artworks back to vertical, and
//! pulls a lever to check the answer. Rendering, audio playback, and
//! window bootstrapping are external collaborators; this crate only
//! simulates.
//!
//! # Modules
//!
//! - [`camera`] - First-person viewpoint with a human walk profile
//! - [`input`] - Platform-agnostic per-frame input snapshots
//! - [`physics`] - Room boundary constraint
//! - [`game`] - Gallery entities, puzzle tracking, lever, and the scene
//!   orchestrator (located in `src/game/`)

pub mod camera;
pub mod input;
pub mod physics;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the types hosts touch every frame
pub use camera::{HumanCameraController, MovementProfile, Orientation};
pub use input::{FrameInput, KeyCode, MovementKeys};
pub use physics::{RoomBounds, clamp_to_room};

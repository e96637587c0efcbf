//! Configuration Module
//!
//! Room layout and tuning ([`GalleryConfig`]) plus the key binding table
//! ([`InputConfig`]) consumed by the host binary.

pub mod gallery_config;
pub mod input_config;

pub use gallery_config::{ArtworkConfig, GalleryConfig, RoomConfig};
pub use input_config::{GalleryAction, InputConfig, MovementBindings};

//! Gallery Artworks
//!
//! The wall-mounted paintings the puzzle is about. All artworks live in
//! one owning vector ([`Gallery`]) and are addressed by [`ArtworkId`]
//! everywhere else, so nothing in the game holds a dangling reference
//! when a level is torn down.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Which wall an artwork hangs on. Render-facing only; the puzzle logic
/// never cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallPlacement {
    North,
    East,
    South,
    West,
}

/// Small integer handle into the gallery's owning vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtworkId(pub usize);

/// One hung painting: identity, placement, and the rotation the render
/// layer should draw it with. The draw rotation is written by the scene
/// after every puzzle mutation; the puzzle's own tracked angle lives in
/// the rotation tracker, not here.
#[derive(Debug, Clone)]
pub struct Artwork {
    /// Display name, used in log lines
    pub name: String,
    /// Center position in world space
    pub position: Vec3,
    /// Wall the frame hangs on
    pub placement: WallPlacement,
    /// Rotation about the wall normal, degrees, for the render layer
    render_rotation: f32,
}

impl Artwork {
    /// Create an artwork hanging at `position` with zero draw rotation.
    pub fn new(name: impl Into<String>, position: Vec3, placement: WallPlacement) -> Self {
        Self {
            name: name.into(),
            position,
            placement,
            render_rotation: 0.0,
        }
    }

    /// World position of the frame center.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the rotation the render layer should draw, in degrees about
    /// the wall normal.
    pub fn set_render_rotation(&mut self, degrees: f32) {
        self.render_rotation = degrees;
    }

    /// Rotation for the render layer, degrees about the wall normal.
    pub fn render_rotation(&self) -> f32 {
        self.render_rotation
    }
}

/// Owning collection of every artwork in the level.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    artworks: Vec<Artwork>,
}

impl Gallery {
    /// Create an empty gallery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hang an artwork and return its id.
    pub fn add(&mut self, artwork: Artwork) -> ArtworkId {
        self.artworks.push(artwork);
        ArtworkId(self.artworks.len() - 1)
    }

    /// Number of artworks hung.
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    /// True when nothing is hung.
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Look up an artwork. Out-of-range ids return `None`.
    pub fn get(&self, id: ArtworkId) -> Option<&Artwork> {
        self.artworks.get(id.0)
    }

    /// Mutable lookup. Out-of-range ids return `None`.
    pub fn get_mut(&mut self, id: ArtworkId) -> Option<&mut Artwork> {
        self.artworks.get_mut(id.0)
    }

    /// Iterate `(id, artwork)` pairs in hang order.
    pub fn iter(&self) -> impl Iterator<Item = (ArtworkId, &Artwork)> {
        self.artworks
            .iter()
            .enumerate()
            .map(|(i, a)| (ArtworkId(i), a))
    }

    /// Iterate mutable artworks in hang order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ArtworkId, &mut Artwork)> {
        self.artworks
            .iter_mut()
            .enumerate()
            .map(|(i, a)| (ArtworkId(i), a))
    }
}

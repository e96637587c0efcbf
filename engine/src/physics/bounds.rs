//! Room Boundary Constraint
//!
//! Pure axis-aligned clamp that keeps the viewpoint inside a room
//! volume. Horizontal axes are clamped on both sides with a wall offset;
//! the vertical axis only gets a floor, there is deliberately no ceiling
//! clamp (the walk controller never pushes the view that high).

use glam::Vec3;

/// Interior dimensions of a rectangular room. Half-extents are derived
/// at clamp time; the struct itself stores full width/height/depth the
/// way level data specifies them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    /// Full extent along X in world units
    pub width: f32,
    /// Full extent along Y in world units
    pub height: f32,
    /// Full extent along Z in world units
    pub depth: f32,
}

impl RoomBounds {
    /// Create bounds from full room dimensions.
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Half-extents along each axis.
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width / 2.0, self.height / 2.0, self.depth / 2.0)
    }
}

/// Clamp a candidate position into the room interior.
///
/// * Horizontal axes are limited to `[-half + wall_offset, half - wall_offset]`
///   independently per axis.
/// * The vertical axis is limited from below by
///   `-half_height + eye_height + floor_offset`; there is no upper bound.
///
/// Pure function, no failure modes: any input position maps to a valid
/// interior position.
pub fn clamp_to_room(
    position: Vec3,
    bounds: &RoomBounds,
    wall_offset: f32,
    floor_offset: f32,
    eye_height: f32,
) -> Vec3 {
    let half = bounds.half_extents();
    let mut clamped = position;

    if clamped.x < -half.x + wall_offset {
        clamped.x = -half.x + wall_offset;
    }
    if clamped.x > half.x - wall_offset {
        clamped.x = half.x - wall_offset;
    }
    if clamped.z < -half.z + wall_offset {
        clamped.z = -half.z + wall_offset;
    }
    if clamped.z > half.z - wall_offset {
        clamped.z = half.z - wall_offset;
    }

    let floor = -half.y + eye_height + floor_offset;
    if clamped.y < floor {
        clamped.y = floor;
    }

    clamped
}

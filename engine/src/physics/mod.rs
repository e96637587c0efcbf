//! Physics Module
//!
//! Only the pieces this demo needs: the room boundary clamp. There is no
//! rigid-body simulation; walls are a pure positional constraint.

pub mod bounds;

pub use bounds::{RoomBounds, clamp_to_room};

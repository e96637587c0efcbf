//! Input Configuration
//!
//! Key bindings as data, so the host binary maps winit keys to game
//! actions through one table instead of scattered `match` arms, and a
//! future remapping UI has something to edit.

use winit::keyboard::KeyCode;

use crate::input::KeyCode as EngineKey;

/// Everything a key press can mean in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    Run,
    /// Rotate the closest artwork counterclockwise by one step
    RotateCcw,
    /// Rotate the closest artwork clockwise by one step
    RotateCw,
    /// Pull the answer lever
    ActivateLever,
    Exit,
}

/// Movement key bindings (WASD + run).
#[derive(Clone, Debug)]
pub struct MovementBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub run_left: KeyCode,
    pub run_right: KeyCode,
}

/// Centralized input configuration for the gallery binary.
#[derive(Clone, Debug)]
pub struct InputConfig {
    pub movement: MovementBindings,
    pub rotate_ccw: KeyCode,
    pub rotate_cw: KeyCode,
    pub activate_lever: KeyCode,
    pub exit: KeyCode,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            movement: MovementBindings {
                forward: KeyCode::KeyW,
                backward: KeyCode::KeyS,
                left: KeyCode::KeyA,
                right: KeyCode::KeyD,
                run_left: KeyCode::ShiftLeft,
                run_right: KeyCode::ShiftRight,
            },
            rotate_ccw: KeyCode::KeyK,
            rotate_cw: KeyCode::KeyL,
            activate_lever: KeyCode::Space,
            exit: KeyCode::Escape,
        }
    }
}

impl InputConfig {
    /// Classify a key. Returns `None` for unbound keys.
    pub fn classify_key(&self, key: KeyCode) -> Option<GalleryAction> {
        if key == self.movement.forward {
            return Some(GalleryAction::MoveForward);
        }
        if key == self.movement.backward {
            return Some(GalleryAction::MoveBackward);
        }
        if key == self.movement.left {
            return Some(GalleryAction::MoveLeft);
        }
        if key == self.movement.right {
            return Some(GalleryAction::MoveRight);
        }
        if key == self.movement.run_left || key == self.movement.run_right {
            return Some(GalleryAction::Run);
        }
        if key == self.rotate_ccw {
            return Some(GalleryAction::RotateCcw);
        }
        if key == self.rotate_cw {
            return Some(GalleryAction::RotateCw);
        }
        if key == self.activate_lever {
            return Some(GalleryAction::ActivateLever);
        }
        if key == self.exit {
            return Some(GalleryAction::Exit);
        }
        None
    }

    /// Engine key code for a held-state movement action, if any.
    pub fn engine_key(action: GalleryAction) -> Option<EngineKey> {
        match action {
            GalleryAction::MoveForward => Some(EngineKey::W),
            GalleryAction::MoveBackward => Some(EngineKey::S),
            GalleryAction::MoveLeft => Some(EngineKey::A),
            GalleryAction::MoveRight => Some(EngineKey::D),
            GalleryAction::Run => Some(EngineKey::ShiftLeft),
            _ => None,
        }
    }
}

//! Movement intent and accumulated mouse motion.
//!
//! Platform code translates key events with [`move_key_for_code`] and feeds
//! relative mouse movement in; the controller drains it once per tick.

use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
}

/// Map a `KeyboardEvent.code` value to a movement key.
#[inline]
pub fn move_key_for_code(code: &str) -> Option<MoveKey> {
    match code {
        "KeyW" | "ArrowUp" => Some(MoveKey::Forward),
        "KeyS" | "ArrowDown" => Some(MoveKey::Backward),
        "KeyA" | "ArrowLeft" => Some(MoveKey::Left),
        "KeyD" | "ArrowRight" => Some(MoveKey::Right),
        "Space" => Some(MoveKey::Jump),
        _ => None,
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Raw mouse counts since the last drain.
    pub mouse: Vec2,
}

impl InputState {
    /// Update a held-movement flag. `Jump` is edge-triggered and not stored.
    pub fn set_key(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::Forward => self.forward = pressed,
            MoveKey::Backward => self.backward = pressed,
            MoveKey::Left => self.left = pressed,
            MoveKey::Right => self.right = pressed,
            MoveKey::Jump => {}
        }
    }

    #[inline]
    pub fn add_mouse_movement(&mut self, dx: f32, dy: f32) {
        self.mouse.x += dx;
        self.mouse.y += dy;
    }

    /// Return accumulated mouse movement and zero the accumulator.
    #[inline]
    pub fn take_mouse(&mut self) -> Vec2 {
        std::mem::take(&mut self.mouse)
    }

    /// Local-space movement intent (-Z forward). Opposing keys do not cancel:
    /// backward overrides forward and right overrides left.
    pub fn move_direction(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir.z = -1.0;
        }
        if self.backward {
            dir.z = 1.0;
        }
        if self.left {
            dir.x = -1.0;
        }
        if self.right {
            dir.x = 1.0;
        }
        dir
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

//! First-person character controller.
//!
//! The controller owns look angles, movement intent and the two weapon
//! springs (sway from mouse look, bob from walking). It never touches a
//! physics engine directly: the host passes the player's [`BodyState`] in,
//! the controller writes the new velocity back, and the host steps physics.
//! Outputs come back as a [`ControllerPose`] the host applies to its scene.

use glam::{EulerRot, Quat, Vec2, Vec3};

use crate::constants::*;
use crate::input::{move_key_for_code, InputState, MoveKey};
use crate::settings::Settings;
use crate::sound::SoundRegistry;
use crate::spring::{Spring, SpringConfig};
use crate::weapon::{FireOutcome, Weapon};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    pub velocity_factor: f32,
    pub jump_velocity: f32,
    pub eye_height: f32,
    pub mouse_sensitivity: f32,
    pub ground_normal_threshold: f32,
    pub weapon_rotation_scale: f32,
    pub look_delta_clamp: f32,
    pub bob_frequency: f32,
    pub bob_amplitude: Vec2,
    pub horizontal_damping: f32,
    pub vertical_damping: f32,
    pub sway_spring: SpringConfig,
    pub bob_spring: SpringConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            velocity_factor: VELOCITY_FACTOR,
            jump_velocity: JUMP_VELOCITY,
            eye_height: EYE_HEIGHT,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            ground_normal_threshold: GROUND_NORMAL_THRESHOLD,
            weapon_rotation_scale: WEAPON_ROTATION_SCALE,
            look_delta_clamp: LOOK_DELTA_CLAMP,
            bob_frequency: BOB_FREQUENCY,
            bob_amplitude: Vec2::new(BOB_AMPLITUDE_X, BOB_AMPLITUDE_Y),
            horizontal_damping: HORIZONTAL_DAMPING,
            vertical_damping: VERTICAL_DAMPING,
            sway_spring: SpringConfig::default(),
            bob_spring: SpringConfig::default(),
        }
    }
}

/// Player rigid body as seen by the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyState {
    pub position: Vec3,
    pub velocity: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerEvent {
    Lock,
    Unlock,
    Fire(FireOutcome),
}

/// Per-frame output for the scene graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerPose {
    pub yaw: f32,
    pub pitch: f32,
    pub eye_position: Vec3,
    /// XYZ Euler angles of the weapon model.
    pub weapon_rotation: Vec3,
    /// Bob offset in the camera's local XY plane.
    pub weapon_offset: Vec2,
    pub muzzle_flash: bool,
}

impl ControllerPose {
    /// Camera orientation: yaw about +Y, then pitch about local +X.
    pub fn camera_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    pub fn weapon_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.weapon_rotation.x,
            self.weapon_rotation.y,
            self.weapon_rotation.z,
        )
    }

    /// Unit view direction (-Z in camera space).
    pub fn forward(&self) -> Vec3 {
        self.camera_rotation() * Vec3::NEG_Z
    }
}

/// Contact normal pointing out of whatever the player touched.
///
/// Solvers report `ni` from body `bi` toward `bj`; when the player is `bi`
/// the normal is flipped.
#[inline]
pub fn contact_normal(ni: Vec3, player_is_first: bool) -> Vec3 {
    if player_is_first {
        -ni
    } else {
        ni
    }
}

/// Convert raw mouse counts to radians.
#[inline]
pub fn look_delta(counts: f32, sensitivity: f32) -> f32 {
    (counts * MOUSE_DEGREES_PER_COUNT * sensitivity).to_radians()
}

pub struct FirstPersonController {
    config: ControllerConfig,
    enabled: bool,
    locked: bool,
    can_jump: bool,
    input: InputState,
    yaw: f32,
    pitch: f32,
    eye_position: Vec3,
    weapon: Option<Weapon>,
    sway: Spring,
    bob: Spring,
    bob_time: f32,
    weapon_rotation: Vec3,
    weapon_offset: Vec2,
}

impl FirstPersonController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            enabled: false,
            locked: false,
            can_jump: false,
            input: InputState::default(),
            yaw: 0.0,
            pitch: 0.0,
            eye_position: Vec3::new(0.0, config.eye_height, 0.0),
            weapon: None,
            sway: Spring::with_config(Vec2::ZERO, config.sway_spring),
            bob: Spring::with_config(Vec2::ZERO, config.bob_spring),
            bob_time: 0.0,
            weapon_rotation: Vec3::new(0.0, std::f32::consts::PI, 0.0),
            weapon_offset: Vec2::ZERO,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn weapon_mut(&mut self) -> Option<&mut Weapon> {
        self.weapon.as_mut()
    }

    /// Install a weapon; sway and bob start from rest.
    pub fn equip(&mut self, weapon: Weapon) {
        self.sway.reset(Vec2::ZERO);
        self.bob.reset(Vec2::ZERO);
        self.bob_time = 0.0;
        self.weapon_offset = Vec2::ZERO;
        self.weapon = Some(weapon);
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        if settings.mouse_sensitivity != self.config.mouse_sensitivity {
            log::info!("[controller] mouse sensitivity -> {:.2}", settings.mouse_sensitivity);
            self.config.mouse_sensitivity = settings.mouse_sensitivity;
        }
    }

    pub fn on_pointer_lock_change(&mut self, locked: bool) -> ControllerEvent {
        self.locked = locked;
        log::info!("[controller] pointer lock {}", if locked { "acquired" } else { "released" });
        if locked {
            ControllerEvent::Lock
        } else {
            ControllerEvent::Unlock
        }
    }

    /// Handle a key transition by `KeyboardEvent.code`. Returns true when the
    /// code maps to a movement key.
    pub fn on_key(&mut self, code: &str, pressed: bool, body: &mut BodyState) -> bool {
        let Some(key) = move_key_for_code(code) else {
            return false;
        };
        if key == MoveKey::Jump {
            if pressed {
                if self.can_jump {
                    body.velocity.y = self.config.jump_velocity;
                }
                self.can_jump = false;
            }
        } else {
            self.input.set_key(key, pressed);
        }
        true
    }

    pub fn on_mouse_move(&mut self, dx: f32, dy: f32) {
        if !self.enabled {
            return;
        }
        self.input.add_mouse_movement(dx, dy);
    }

    /// Primary button fires while pointer lock is held and a weapon is equipped.
    pub fn on_mouse_down(&mut self, button: i16, sounds: &mut SoundRegistry) -> Option<ControllerEvent> {
        if !self.locked || button != 0 {
            return None;
        }
        let emitter = self.eye_position;
        let weapon = self.weapon.as_mut()?;
        Some(ControllerEvent::Fire(weapon.fire(sounds, emitter)))
    }

    /// `normal` must point out of the touched surface (see [`contact_normal`]).
    pub fn on_contact(&mut self, normal: Vec3) {
        if normal.dot(Vec3::Y) > self.config.ground_normal_threshold {
            self.can_jump = true;
        }
    }

    pub fn pose(&self) -> ControllerPose {
        ControllerPose {
            yaw: self.yaw,
            pitch: self.pitch,
            eye_position: self.eye_position,
            weapon_rotation: self.weapon_rotation,
            weapon_offset: self.weapon_offset,
            muzzle_flash: self
                .weapon
                .as_ref()
                .map(Weapon::muzzle_flash_visible)
                .unwrap_or(false),
        }
    }

    /// Advance one frame. Disabled controllers leave everything untouched.
    pub fn update(&mut self, dt: f32, body: &mut BodyState) -> ControllerPose {
        if !self.enabled {
            return self.pose();
        }
        let cfg = self.config;

        let mouse = self.input.take_mouse();
        let yaw_delta = look_delta(mouse.x, cfg.mouse_sensitivity);
        let pitch_delta = look_delta(mouse.y, cfg.mouse_sensitivity);
        self.yaw -= yaw_delta;
        self.pitch = (self.pitch - pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        if let Some(weapon) = self.weapon.as_mut() {
            let clamp = cfg.look_delta_clamp;
            let rot = self.sway.update(
                Vec2::new(yaw_delta.clamp(-clamp, clamp), pitch_delta.clamp(-clamp, clamp)),
                dt,
            );
            self.weapon_rotation = Vec3::new(
                rot.y * cfg.weapon_rotation_scale,
                rot.x * cfg.weapon_rotation_scale + std::f32::consts::PI,
                0.0,
            );
            weapon.update(dt);
        }

        let mut input_velocity = Quat::from_rotation_y(self.yaw) * self.input.move_direction();
        if input_velocity.length_squared() > 0.0 {
            input_velocity = input_velocity.normalize() * (cfg.velocity_factor * dt);
        }

        if self.weapon.is_some() {
            let target = if input_velocity.length_squared() > 0.0 {
                let t = self.bob_time * cfg.bob_frequency;
                let target = Vec2::new(
                    (t - std::f32::consts::FRAC_PI_2).sin() * cfg.bob_amplitude.x,
                    t.sin().abs() * cfg.bob_amplitude.y,
                );
                self.bob_time += dt;
                target
            } else {
                self.bob_time = 0.0;
                Vec2::ZERO
            };
            self.weapon_offset = self.bob.update(target, dt);
        }

        let keep_h = (1.0 - cfg.horizontal_damping).powf(dt);
        let keep_v = (1.0 - cfg.vertical_damping).powf(dt);
        body.velocity.x = body.velocity.x * keep_h + input_velocity.x;
        body.velocity.y *= keep_v;
        body.velocity.z = body.velocity.z * keep_h + input_velocity.z;

        self.eye_position = body.position;
        self.pose()
    }

    #[inline]
    pub fn bob_time(&self) -> f32 {
        self.bob_time
    }
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

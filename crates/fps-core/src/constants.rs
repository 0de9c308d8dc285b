use std::f32::consts::PI;

// Shared gameplay tuning constants used by both web and native frontends.

// Spring smoothing
pub const SPRING_DEFAULT_STIFFNESS: f32 = 0.01;
pub const SPRING_DEFAULT_DAMPING: f32 = 0.5;
pub const SPRING_TIME_SCALE: f32 = 1000.0; // coefficients are tuned per millisecond

// Movement
pub const VELOCITY_FACTOR: f32 = 40.0; // input impulse per second of held movement
pub const JUMP_VELOCITY: f32 = 9.0;
pub const EYE_HEIGHT: f32 = 2.0; // eyes above the body origin at spawn
pub const GROUND_NORMAL_THRESHOLD: f32 = 0.5; // min contact normal . up to count as ground

// Per-second velocity retention is (1 - damping)^dt
pub const HORIZONTAL_DAMPING: f32 = 0.9999;
pub const VERTICAL_DAMPING: f32 = 0.5;

// Mouse look
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 5.0;
pub const MOUSE_DEGREES_PER_COUNT: f32 = 0.022; // classic m_yaw/m_pitch scale
pub const PITCH_LIMIT: f32 = PI / 2.0;

// Weapon sway and bob
pub const LOOK_DELTA_CLAMP: f32 = 0.2; // radians fed to the sway spring
pub const WEAPON_ROTATION_SCALE: f32 = 3.0;
pub const BOB_FREQUENCY: f32 = 8.0; // radians per second of walking
pub const BOB_AMPLITUDE_X: f32 = 0.01;
pub const BOB_AMPLITUDE_Y: f32 = 0.02;

// Weapon fire
pub const FIRE_ANIMATION_SEC: f32 = 0.25;
pub const MUZZLE_FLASH_SEC: f32 = 0.05;

// Settings bounds
pub const DEFAULT_FOV: f32 = 70.0;
pub const FOV_MIN: f32 = 30.0;
pub const FOV_MAX: f32 = 120.0;
pub const DEFAULT_MASTER_VOLUME: f32 = 1.0;

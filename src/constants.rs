// Browser-side tuning constants for the web shell.

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // RAF pauses in background tabs; cap the catch-up step

// Stand-in ground plane used until a physics engine drives the body
pub const GROUND_Y: f32 = 2.0;
pub const GRAVITY: f32 = -9.82;
pub const SPAWN_POSITION: [f32; 3] = [0.0, GROUND_Y, 0.0];

// Fire sound synthesis (noise burst with exponential decay)
pub const FIRE_SOUND_SEC: f32 = 0.35;
pub const FIRE_SOUND_DECAY_SEC: f32 = 0.06;
pub const FIRE_SOUND_GAIN: f32 = 0.8;

// Positional audio
pub const PANNER_REF_DISTANCE: f32 = 1.0;
pub const PANNER_MAX_DISTANCE: f32 = 50.0;

// Settings hotkey steps
pub const SENSITIVITY_STEP: f32 = 0.5;
pub const VOLUME_STEP: f32 = 0.05;

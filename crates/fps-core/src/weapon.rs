//! Weapon fire state machine.
//!
//! Firing restarts the fire animation from its first frame and opens a short
//! muzzle flash window. If the fire sound has finished loading, a positional
//! one-shot is spawned and tracked until the front-end reports it ended.
//! There is no cooldown: firing mid-animation restarts it.

use glam::Vec3;

use crate::constants::{FIRE_ANIMATION_SEC, MUZZLE_FLASH_SEC};
use crate::sound::{SoundError, SoundId, SoundRegistry};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponConfig {
    pub fire_animation_sec: f32,
    pub muzzle_flash_sec: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            fire_animation_sec: FIRE_ANIMATION_SEC,
            muzzle_flash_sec: MUZZLE_FLASH_SEC,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeaponState {
    Idle,
    Firing { elapsed: f32 },
}

/// What a single trigger pull produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FireOutcome {
    /// The animation was already running and got rewound.
    pub restarted: bool,
    pub sound: Option<SoundId>,
}

#[derive(Debug)]
pub struct Weapon {
    config: WeaponConfig,
    state: WeaponState,
    sound_loaded: bool,
    sounds: Vec<SoundId>,
    shots: u64,
}

impl Weapon {
    pub fn new(config: WeaponConfig) -> Self {
        Self {
            config,
            state: WeaponState::Idle,
            sound_loaded: false,
            sounds: Vec::new(),
            shots: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> WeaponConfig {
        self.config
    }

    #[inline]
    pub fn state(&self) -> WeaponState {
        self.state
    }

    /// Mark the fire sound as available. Shots before this are silent.
    pub fn set_sound_loaded(&mut self, loaded: bool) {
        self.sound_loaded = loaded;
    }

    #[inline]
    pub fn has_sound(&self) -> bool {
        self.sound_loaded
    }

    /// Sound instances spawned by this weapon that are still playing.
    pub fn live_sounds(&self) -> &[SoundId] {
        &self.sounds
    }

    #[inline]
    pub fn shots_fired(&self) -> u64 {
        self.shots
    }

    pub fn fire(&mut self, sounds: &mut SoundRegistry, emitter: Vec3) -> FireOutcome {
        let restarted = matches!(self.state, WeaponState::Firing { .. });
        self.state = WeaponState::Firing { elapsed: 0.0 };
        self.shots += 1;

        let sound = if self.sound_loaded {
            let id = sounds.spawn(emitter);
            self.sounds.push(id);
            Some(id)
        } else {
            None
        };
        log::debug!(
            "[weapon] fire #{} restarted={} sound={:?}",
            self.shots,
            restarted,
            sound
        );
        FireOutcome { restarted, sound }
    }

    /// Advance the fire animation; returns to idle once it has played out.
    pub fn update(&mut self, dt: f32) {
        if let WeaponState::Firing { elapsed } = self.state {
            let elapsed = elapsed + dt.max(0.0);
            self.state = if elapsed >= self.config.fire_animation_sec {
                WeaponState::Idle
            } else {
                WeaponState::Firing { elapsed }
            };
        }
    }

    pub fn muzzle_flash_visible(&self) -> bool {
        match self.state {
            WeaponState::Firing { elapsed } => elapsed < self.config.muzzle_flash_sec,
            WeaponState::Idle => false,
        }
    }

    /// Normalised animation progress in [0, 1]; `None` when idle.
    pub fn animation_progress(&self) -> Option<f32> {
        match self.state {
            WeaponState::Firing { elapsed } => {
                Some((elapsed / self.config.fire_animation_sec.max(f32::EPSILON)).clamp(0.0, 1.0))
            }
            WeaponState::Idle => None,
        }
    }

    /// Detach a finished one-shot from this weapon and the registry.
    pub fn on_sound_ended(&mut self, id: SoundId, sounds: &mut SoundRegistry) -> Result<(), SoundError> {
        self.sounds.retain(|s| *s != id);
        sounds.release(id).map(|_| ())
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new(WeaponConfig::default())
    }
}

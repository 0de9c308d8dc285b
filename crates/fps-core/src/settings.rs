//! User-facing settings and an observable store for them.
//!
//! Subscribers are called once with the current value when they subscribe
//! and again after every accepted change. Rejected changes notify nobody.

use thiserror::Error;

use crate::constants::{DEFAULT_FOV, DEFAULT_MASTER_VOLUME, DEFAULT_MOUSE_SENSITIVITY, FOV_MAX, FOV_MIN};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub mouse_sensitivity: f32,
    /// Linear gain in [0, 1].
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            master_volume: DEFAULT_MASTER_VOLUME,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("fov {0} outside the supported range of degrees")]
    Fov(f32),
    #[error("mouse sensitivity must be finite and positive, got {0}")]
    MouseSensitivity(f32),
    #[error("master volume {0} outside [0, 1]")]
    MasterVolume(f32),
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(FOV_MIN..=FOV_MAX).contains(&self.fov) {
            return Err(SettingsError::Fov(self.fov));
        }
        if !self.mouse_sensitivity.is_finite() || self.mouse_sensitivity <= 0.0 {
            return Err(SettingsError::MouseSensitivity(self.mouse_sensitivity));
        }
        if !(0.0..=1.0).contains(&self.master_volume) {
            return Err(SettingsError::MasterVolume(self.master_volume));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Subscriber = Box<dyn FnMut(&Settings)>;

pub struct SettingsStore {
    value: Settings,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u32,
}

impl SettingsStore {
    pub fn new(value: Settings) -> Result<Self, SettingsError> {
        value.validate()?;
        Ok(Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        })
    }

    #[inline]
    pub fn get(&self) -> Settings {
        self.value
    }

    pub fn subscribe(&mut self, mut f: impl FnMut(&Settings) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        f(&self.value);
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn set(&mut self, value: Settings) -> Result<(), SettingsError> {
        value.validate()?;
        if value == self.value {
            return Ok(());
        }
        self.value = value;
        log::info!(
            "[settings] fov={:.0} sensitivity={:.2} volume={:.2}",
            value.fov,
            value.mouse_sensitivity,
            value.master_volume
        );
        for (_, f) in self.subscribers.iter_mut() {
            f(&self.value);
        }
        Ok(())
    }

    pub fn update(&mut self, f: impl FnOnce(&mut Settings)) -> Result<(), SettingsError> {
        let mut next = self.value;
        f(&mut next);
        self.set(next)
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            value: Settings::default(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }
}

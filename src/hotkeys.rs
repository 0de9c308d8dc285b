// Settings hotkeys. Kept free of web-sys so host tests can include it.

use crate::constants::{SENSITIVITY_STEP, VOLUME_STEP};
use fps_core::Settings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettingsChange {
    Sensitivity(f32),
    Volume(f32),
}

/// Map a `KeyboardEvent.key` value to a settings adjustment.
#[inline]
pub fn settings_change_for_key(key: &str) -> Option<SettingsChange> {
    match key {
        "[" => Some(SettingsChange::Sensitivity(-SENSITIVITY_STEP)),
        "]" => Some(SettingsChange::Sensitivity(SENSITIVITY_STEP)),
        "-" | "_" => Some(SettingsChange::Volume(-VOLUME_STEP)),
        "=" | "+" => Some(SettingsChange::Volume(VOLUME_STEP)),
        _ => None,
    }
}

/// Apply a change, keeping the result inside the valid settings ranges.
pub fn apply_settings_change(settings: &mut Settings, change: SettingsChange) {
    match change {
        SettingsChange::Sensitivity(d) => {
            settings.mouse_sensitivity = (settings.mouse_sensitivity + d).max(SENSITIVITY_STEP);
        }
        SettingsChange::Volume(d) => {
            settings.master_volume = (settings.master_volume + d).clamp(0.0, 1.0);
        }
    }
}

// Host-side tests for the settings hotkeys.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod hotkeys {
    include!("../src/hotkeys.rs");
}

use fps_core::Settings;
use hotkeys::*;

#[test]
fn brackets_adjust_sensitivity() {
    assert_eq!(
        settings_change_for_key("]"),
        Some(SettingsChange::Sensitivity(constants::SENSITIVITY_STEP))
    );
    assert_eq!(
        settings_change_for_key("["),
        Some(SettingsChange::Sensitivity(-constants::SENSITIVITY_STEP))
    );
}

#[test]
fn plus_minus_adjust_volume() {
    for key in ["=", "+"] {
        assert_eq!(
            settings_change_for_key(key),
            Some(SettingsChange::Volume(constants::VOLUME_STEP))
        );
    }
    for key in ["-", "_"] {
        assert_eq!(
            settings_change_for_key(key),
            Some(SettingsChange::Volume(-constants::VOLUME_STEP))
        );
    }
}

#[test]
fn movement_keys_are_not_settings_hotkeys() {
    for key in ["w", "a", "s", "d", " ", "Escape"] {
        assert_eq!(settings_change_for_key(key), None, "key {key:?}");
    }
}

#[test]
fn changes_stay_within_valid_ranges() {
    let mut s = Settings::default();
    for _ in 0..100 {
        apply_settings_change(&mut s, SettingsChange::Sensitivity(-constants::SENSITIVITY_STEP));
        apply_settings_change(&mut s, SettingsChange::Volume(constants::VOLUME_STEP));
    }
    assert_eq!(s.mouse_sensitivity, constants::SENSITIVITY_STEP);
    assert_eq!(s.master_volume, 1.0);
    assert!(s.validate().is_ok());

    for _ in 0..100 {
        apply_settings_change(&mut s, SettingsChange::Volume(-constants::VOLUME_STEP));
    }
    assert_eq!(s.master_volume, 0.0);
    assert!(s.validate().is_ok());
}

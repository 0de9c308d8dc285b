// Integration tests for the first-person controller.

use fps_core::constants::{JUMP_VELOCITY, PITCH_LIMIT};
use fps_core::{
    move_key_for_code, BodyState, ControllerConfig, ControllerEvent, FirstPersonController, MoveKey,
    Settings, SettingsStore, SoundRegistry, Weapon,
};
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

const DT: f32 = 1.0 / 60.0;

fn enabled_controller() -> FirstPersonController {
    let mut c = FirstPersonController::new(ControllerConfig::default());
    c.set_enabled(true);
    c
}

#[test]
fn key_codes_map_to_movement() {
    assert_eq!(move_key_for_code("KeyW"), Some(MoveKey::Forward));
    assert_eq!(move_key_for_code("ArrowUp"), Some(MoveKey::Forward));
    assert_eq!(move_key_for_code("KeyS"), Some(MoveKey::Backward));
    assert_eq!(move_key_for_code("ArrowDown"), Some(MoveKey::Backward));
    assert_eq!(move_key_for_code("KeyA"), Some(MoveKey::Left));
    assert_eq!(move_key_for_code("ArrowLeft"), Some(MoveKey::Left));
    assert_eq!(move_key_for_code("KeyD"), Some(MoveKey::Right));
    assert_eq!(move_key_for_code("ArrowRight"), Some(MoveKey::Right));
    assert_eq!(move_key_for_code("Space"), Some(MoveKey::Jump));
    assert_eq!(move_key_for_code("KeyQ"), None);
    assert_eq!(move_key_for_code("w"), None);
}

#[test]
fn disabled_controller_ignores_mouse_and_update() {
    let mut c = FirstPersonController::default();
    let mut body = BodyState {
        position: Vec3::new(1.0, 2.0, 3.0),
        velocity: Vec3::new(4.0, 5.0, 6.0),
    };
    c.on_mouse_move(500.0, 500.0);
    let before = c.pose();
    let after = c.update(DT, &mut body);
    assert_eq!(before, after);
    assert_eq!(body.velocity, Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(c.input().mouse, Vec2::ZERO);
}

#[test]
fn mouse_right_turns_yaw_negative_and_drains_accumulator() {
    let mut c = enabled_controller();
    let mut body = BodyState::default();
    c.on_mouse_move(50.0, 0.0);
    c.on_mouse_move(50.0, 0.0);
    let pose = c.update(DT, &mut body);
    let expected = (100.0_f32 * 0.022 * 5.0).to_radians();
    assert!((pose.yaw + expected).abs() < 1e-5);
    assert_eq!(c.input().mouse, Vec2::ZERO);
}

#[test]
fn pitch_is_clamped_to_straight_up_and_down() {
    let mut c = enabled_controller();
    let mut body = BodyState::default();
    for _ in 0..50 {
        c.on_mouse_move(0.0, 10_000.0);
        let pose = c.update(DT, &mut body);
        assert!(pose.pitch >= -PITCH_LIMIT && pose.pitch <= PITCH_LIMIT);
    }
    assert_eq!(c.pose().pitch, -PITCH_LIMIT);
    for _ in 0..50 {
        c.on_mouse_move(0.0, -10_000.0);
        c.update(DT, &mut body);
    }
    assert_eq!(c.pose().pitch, PITCH_LIMIT);
}

#[test]
fn forward_input_adds_velocity_along_view() {
    let mut c = enabled_controller();
    let mut body = BodyState::default();
    assert!(c.on_key("KeyW", true, &mut body));
    c.update(DT, &mut body);
    // Facing -Z at yaw 0.
    assert!((body.velocity.z + 40.0 * DT).abs() < 1e-5);
    assert!(body.velocity.x.abs() < 1e-6);
}

#[test]
fn diagonal_input_is_normalised() {
    let mut c = enabled_controller();
    let mut body = BodyState::default();
    c.on_key("KeyW", true, &mut body);
    c.on_key("KeyD", true, &mut body);
    c.update(DT, &mut body);
    let planar = Vec2::new(body.velocity.x, body.velocity.z).length();
    assert!((planar - 40.0 * DT).abs() < 1e-5);
}

#[test]
fn backward_overrides_forward() {
    let mut c = enabled_controller();
    let mut body = BodyState::default();
    c.on_key("KeyW", true, &mut body);
    c.on_key("KeyS", true, &mut body);
    c.update(DT, &mut body);
    assert!(body.velocity.z > 0.0);
}

#[test]
fn releasing_keys_stops_input_and_damping_bleeds_speed() {
    let mut c = enabled_controller();
    let mut body = BodyState::default();
    c.on_key("KeyW", true, &mut body);
    c.update(DT, &mut body);
    c.on_key("KeyW", false, &mut body);
    let before = body.velocity.z.abs();
    c.update(DT, &mut body);
    assert!(body.velocity.z.abs() < before);
}

#[test]
fn vertical_velocity_decays_by_half_per_second() {
    let mut c = enabled_controller();
    let mut body = BodyState {
        velocity: Vec3::new(0.0, 8.0, 0.0),
        ..Default::default()
    };
    c.update(1.0, &mut body);
    assert!((body.velocity.y - 4.0).abs() < 1e-4);
}

#[test]
fn jump_requires_ground_contact_and_consumes_it() {
    let mut c = enabled_controller();
    let mut body = BodyState::default();

    c.on_key("Space", true, &mut body);
    assert_eq!(body.velocity.y, 0.0);

    // Wall contact is not ground.
    c.on_contact(Vec3::X);
    assert!(!c.can_jump());

    c.on_contact(Vec3::new(0.0, 1.0, 0.2).normalize());
    assert!(c.can_jump());
    c.on_key("Space", true, &mut body);
    assert_eq!(body.velocity.y, JUMP_VELOCITY);
    assert!(!c.can_jump());

    body.velocity.y = 0.0;
    c.on_key("Space", true, &mut body);
    assert_eq!(body.velocity.y, 0.0);
}

#[test]
fn eye_follows_body_position() {
    let mut c = enabled_controller();
    assert_eq!(c.pose().eye_position, Vec3::new(0.0, 2.0, 0.0));
    let mut body = BodyState {
        position: Vec3::new(3.0, 1.0, -2.0),
        ..Default::default()
    };
    let pose = c.update(DT, &mut body);
    assert_eq!(pose.eye_position, body.position);
}

#[test]
fn weapon_bob_runs_while_walking_and_resets_when_still() {
    let mut c = enabled_controller();
    c.equip(Weapon::default());
    let mut body = BodyState::default();

    c.on_key("KeyW", true, &mut body);
    let mut moved = false;
    for _ in 0..60 {
        let pose = c.update(DT, &mut body);
        moved |= pose.weapon_offset.length() > 1e-4;
    }
    assert!(moved);
    assert!(c.bob_time() > 0.9);

    c.on_key("KeyW", false, &mut body);
    c.update(DT, &mut body);
    assert_eq!(c.bob_time(), 0.0);
    for _ in 0..300 {
        c.update(DT, &mut body);
    }
    assert!(c.pose().weapon_offset.length() < 1e-4);
}

#[test]
fn weapon_sway_faces_backwards_at_rest_and_lags_mouse() {
    let mut c = enabled_controller();
    c.equip(Weapon::default());
    let mut body = BodyState::default();

    let pose = c.update(DT, &mut body);
    assert!((pose.weapon_rotation.y - std::f32::consts::PI).abs() < 1e-6);
    assert_eq!(pose.weapon_rotation.x, 0.0);

    c.on_mouse_move(40.0, 0.0);
    let pose = c.update(DT, &mut body);
    // Sway spring starts moving but does not jump to the full delta.
    let full = (40.0_f32 * 0.022 * 5.0).to_radians().min(0.2) * 3.0;
    let sway = pose.weapon_rotation.y - std::f32::consts::PI;
    assert!(sway > 0.0 && sway < full);
}

#[test]
fn without_weapon_offsets_stay_zero() {
    let mut c = enabled_controller();
    let mut body = BodyState::default();
    c.on_key("KeyD", true, &mut body);
    c.on_mouse_move(30.0, 30.0);
    let pose = c.update(DT, &mut body);
    assert_eq!(pose.weapon_offset, Vec2::ZERO);
    assert!(!pose.muzzle_flash);
}

#[test]
fn fire_needs_lock_primary_button_and_weapon() {
    let mut c = enabled_controller();
    let mut sounds = SoundRegistry::new();

    assert!(c.on_mouse_down(0, &mut sounds).is_none());
    assert_eq!(c.on_pointer_lock_change(true), ControllerEvent::Lock);
    assert!(c.on_mouse_down(0, &mut sounds).is_none());

    c.equip(Weapon::default());
    assert!(c.on_mouse_down(2, &mut sounds).is_none());
    match c.on_mouse_down(0, &mut sounds) {
        Some(ControllerEvent::Fire(outcome)) => assert!(!outcome.restarted),
        other => panic!("expected fire, got {other:?}"),
    }
    assert!(c.pose().muzzle_flash);

    assert_eq!(c.on_pointer_lock_change(false), ControllerEvent::Unlock);
    assert!(c.on_mouse_down(0, &mut sounds).is_none());
}

#[test]
fn settings_subscription_updates_sensitivity() {
    let controller = Rc::new(RefCell::new(enabled_controller()));
    let mut store = SettingsStore::default();
    let c2 = controller.clone();
    store.subscribe(move |s: &Settings| c2.borrow_mut().apply_settings(s));

    store.update(|s| s.mouse_sensitivity = 2.0).unwrap();
    assert_eq!(controller.borrow().config().mouse_sensitivity, 2.0);

    let mut body = BodyState::default();
    controller.borrow_mut().on_mouse_move(100.0, 0.0);
    let pose = controller.borrow_mut().update(DT, &mut body);
    let expected = (100.0_f32 * 0.022 * 2.0).to_radians();
    assert!((pose.yaw + expected).abs() < 1e-5);
}

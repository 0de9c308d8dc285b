use super::InputWiring;
use crate::{dom, overlay};
use fps_core::{ControllerEvent, FirstPersonController, SoundId, SoundRegistry};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(w: &InputWiring) {
    wire_lock_request(w);
    wire_pointerlockchange(w);
    wire_mousemove(w);
    wire_mousedown(w);
}

fn wire_lock_request(w: &InputWiring) {
    let wc = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        if !dom::is_pointer_locked(&wc.document) {
            wc.audio.resume();
            dom::request_pointer_lock(&wc.canvas);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();

    let wo = w.clone();
    dom::add_click_listener(&w.document, "start-overlay", move || {
        wo.audio.resume();
        dom::request_pointer_lock(&wo.canvas);
    });
}

fn wire_pointerlockchange(w: &InputWiring) {
    let wc = w.clone();
    let change = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let locked = dom::is_pointer_locked(&wc.document);
        let mut controller = wc.controller.borrow_mut();
        controller.on_pointer_lock_change(locked);
        controller.set_enabled(locked);
        drop(controller);
        overlay::sync_with_lock(&wc.document, locked);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("pointerlockchange", change.as_ref().unchecked_ref());
    change.forget();

    let error = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        log::error!("[pointer] unable to use the Pointer Lock API");
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("pointerlockerror", error.as_ref().unchecked_ref());
    error.forget();
}

fn wire_mousemove(w: &InputWiring) {
    let wc = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        wc.controller
            .borrow_mut()
            .on_mouse_move(ev.movement_x() as f32, ev.movement_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousedown(w: &InputWiring) {
    let wc = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (event, emitter) = {
            let mut controller = wc.controller.borrow_mut();
            let event = controller.on_mouse_down(ev.button(), &mut wc.sounds.borrow_mut());
            (event, controller.pose().eye_position)
        };
        if let Some(ControllerEvent::Fire(outcome)) = event {
            if let Some(id) = outcome.sound {
                play_fire_sound(&wc, id, emitter);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn release_sound(
    controller: &Rc<RefCell<FirstPersonController>>,
    sounds: &Rc<RefCell<SoundRegistry>>,
    id: SoundId,
) {
    let mut controller = controller.borrow_mut();
    if let Some(weapon) = controller.weapon_mut() {
        if let Err(e) = weapon.on_sound_ended(id, &mut sounds.borrow_mut()) {
            log::warn!("[sound] {}", e);
        }
    }
}

fn play_fire_sound(w: &InputWiring, id: SoundId, emitter: Vec3) {
    let buffer = w.fire_buffer.borrow().clone();
    let Some(buffer) = buffer else {
        release_sound(&w.controller, &w.sounds, id);
        return;
    };
    let controller = w.controller.clone();
    let sounds = w.sounds.clone();
    let on_ended = move || release_sound(&controller, &sounds, id);
    if let Err(e) = w.audio.play_positional(&buffer, emitter, on_ended) {
        log::error!("[sound] fire playback failed: {:?}", e);
        release_sound(&w.controller, &w.sounds, id);
    }
}

use super::InputWiring;
use crate::hotkeys::{apply_settings_change, settings_change_for_key};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    let code = ev.code();
    let handled = {
        let mut body = w.body.borrow_mut();
        w.controller.borrow_mut().on_key(&code, true, &mut body)
    };
    if handled {
        ev.prevent_default();
        return;
    }
    if let Some(change) = settings_change_for_key(&ev.key()) {
        // Subscribers borrow the controller; no controller borrow may be live here.
        let result = w
            .settings
            .borrow_mut()
            .update(|s| apply_settings_change(s, change));
        if let Err(e) = result {
            log::error!("[keys] rejected settings change {:?}: {}", change, e);
        }
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, w: &InputWiring) {
    let code = ev.code();
    let mut body = w.body.borrow_mut();
    w.controller.borrow_mut().on_key(&code, false, &mut body);
}

pub fn wire_keyboard(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let wd = w.clone();
    let keydown = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &wd);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let wu = w.clone();
    let keyup = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &wu);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();
}

use crate::constants::{GRAVITY, GROUND_Y, MAX_FRAME_DT_SEC};
use crate::events::InputWiring;
use fps_core::BodyState;
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub wiring: InputWiring,
    pub last_instant: Instant,
    pub muzzle_flash: bool,
}

impl FrameContext {
    pub fn new(wiring: InputWiring) -> Self {
        Self {
            wiring,
            last_instant: Instant::now(),
            muzzle_flash: false,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let pose = {
            let mut body = self.wiring.body.borrow_mut();
            let mut controller = self.wiring.controller.borrow_mut();
            if let Some(normal) = step_body(&mut body, dt_sec) {
                controller.on_contact(normal);
            }
            controller.update(dt_sec, &mut body)
        };

        self.wiring
            .audio
            .update_listener(pose.eye_position, pose.forward());

        if pose.muzzle_flash != self.muzzle_flash {
            self.muzzle_flash = pose.muzzle_flash;
            log::debug!("[frame] muzzle flash {}", if pose.muzzle_flash { "on" } else { "off" });
        }
    }
}

// Stand-in integration against a flat ground plane; returns the contact
// normal (pointing out of the ground) when the body rests on it.
fn step_body(body: &mut BodyState, dt_sec: f32) -> Option<Vec3> {
    body.velocity.y += GRAVITY * dt_sec;
    body.position += body.velocity * dt_sec;
    if body.position.y <= GROUND_Y {
        body.position.y = GROUND_Y;
        body.velocity.y = body.velocity.y.max(0.0);
        return Some(Vec3::Y);
    }
    None
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

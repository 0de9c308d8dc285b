#![cfg(target_arch = "wasm32")]
use crate::constants::SPAWN_POSITION;
use fps_core::{
    BodyState, ControllerConfig, FirstPersonController, Settings, SettingsStore, SoundRegistry,
    Weapon, WeaponConfig,
};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod hotkeys;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fps-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

// Settings changes fan out to the controller, the master bus and the hint.
fn wire_settings(
    store: &Rc<RefCell<SettingsStore>>,
    controller: &Rc<RefCell<FirstPersonController>>,
    audio: &Rc<audio::SoundEngine>,
    document: &web::Document,
) {
    let controller = controller.clone();
    let audio = audio.clone();
    let document = document.clone();
    store.borrow_mut().subscribe(move |s: &Settings| {
        controller.borrow_mut().apply_settings(s);
        audio.set_master_volume(s.master_volume);
        overlay::update_hint(&document, s);
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let settings = Rc::new(RefCell::new(SettingsStore::new(Settings::default())?));
    let initial = settings.borrow().get();

    let mut controller = FirstPersonController::new(ControllerConfig {
        mouse_sensitivity: initial.mouse_sensitivity,
        ..ControllerConfig::default()
    });
    controller.equip(Weapon::new(WeaponConfig::default()));
    let controller = Rc::new(RefCell::new(controller));

    let body = Rc::new(RefCell::new(BodyState {
        position: Vec3::from_array(SPAWN_POSITION),
        velocity: Vec3::ZERO,
    }));

    let audio = Rc::new(audio::SoundEngine::new(initial.master_volume)?);
    let fire_buffer = Rc::new(RefCell::new(None::<web::AudioBuffer>));
    match audio::synth_fire_buffer(&audio.ctx) {
        Ok(buf) => {
            *fire_buffer.borrow_mut() = Some(buf);
            if let Some(weapon) = controller.borrow_mut().weapon_mut() {
                weapon.set_sound_loaded(true);
            }
            log::info!("[audio] fire sound ready");
        }
        Err(e) => log::error!("[audio] fire sound unavailable: {:?}", e),
    }

    wire_settings(&settings, &controller, &audio, &document);
    overlay::sync_with_lock(&document, dom::is_pointer_locked(&document));

    let wiring = events::InputWiring {
        document: document.clone(),
        canvas,
        controller,
        body,
        sounds: Rc::new(RefCell::new(SoundRegistry::new())),
        settings,
        audio,
        fire_buffer,
    };
    events::wire_keyboard(&wiring);
    events::wire_pointer_handlers(&wiring);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(wiring))));
    Ok(())
}

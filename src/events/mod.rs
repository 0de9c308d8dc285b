pub mod keyboard;
pub mod pointer;

use crate::audio::SoundEngine;
use fps_core::{BodyState, FirstPersonController, SettingsStore, SoundRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use keyboard::wire_keyboard;
pub use pointer::wire_pointer_handlers;

/// Shared game objects handed to every browser callback.
#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<FirstPersonController>>,
    pub body: Rc<RefCell<BodyState>>,
    pub sounds: Rc<RefCell<SoundRegistry>>,
    pub settings: Rc<RefCell<SettingsStore>>,
    pub audio: Rc<SoundEngine>,
    pub fire_buffer: Rc<RefCell<Option<web::AudioBuffer>>>,
}

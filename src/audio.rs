use crate::constants::*;
use glam::Vec3;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// WebAudio graph for the player: one listener riding the camera and a
/// master gain every positional one-shot routes through.
pub struct SoundEngine {
    pub ctx: web::AudioContext,
    pub listener: web::AudioListener,
    pub master_gain: web::GainNode,
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

impl SoundEngine {
    pub fn new(master_volume: f32) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(js_err)?;
        let listener = ctx.listener();
        let master_gain = web::GainNode::new(&ctx).map_err(js_err)?;
        master_gain.gain().set_value(master_volume);
        master_gain
            .connect_with_audio_node(&ctx.destination())
            .map_err(js_err)?;
        Ok(Self {
            ctx,
            listener,
            master_gain,
        })
    }

    pub fn resume(&self) {
        _ = self.ctx.resume();
    }

    pub fn set_master_volume(&self, volume: f32) {
        self.master_gain.gain().set_value(volume);
    }

    /// Keep the listener on the camera so panning follows the view.
    pub fn update_listener(&self, eye: Vec3, forward: Vec3) {
        self.listener
            .set_position(eye.x as f64, eye.y as f64, eye.z as f64);
        _ = self.listener.set_orientation(
            forward.x as f64,
            forward.y as f64,
            forward.z as f64,
            0.0,
            1.0,
            0.0,
        );
    }

    /// Play `buffer` once from `position`; `on_ended` runs when playback stops.
    pub fn play_positional(
        &self,
        buffer: &web::AudioBuffer,
        position: Vec3,
        on_ended: impl FnOnce() + 'static,
    ) -> anyhow::Result<()> {
        let src = web::AudioBufferSourceNode::new(&self.ctx).map_err(js_err)?;
        src.set_buffer(Some(buffer));

        let panner = web::PannerNode::new(&self.ctx).map_err(js_err)?;
        panner.set_panning_model(web::PanningModelType::Hrtf);
        panner.set_distance_model(web::DistanceModelType::Inverse);
        panner.set_ref_distance(PANNER_REF_DISTANCE as f64);
        panner.set_max_distance(PANNER_MAX_DISTANCE as f64);
        panner.position_x().set_value(position.x);
        panner.position_y().set_value(position.y);
        panner.position_z().set_value(position.z);

        src.connect_with_audio_node(&panner).map_err(js_err)?;
        panner
            .connect_with_audio_node(&self.master_gain)
            .map_err(js_err)?;

        let ended = Closure::once_into_js(move || {
            on_ended();
        });
        src.set_onended(Some(ended.unchecked_ref()));
        src.start().map_err(js_err)?;
        Ok(())
    }
}

/// Build the fire sound procedurally: a decaying noise burst.
pub fn synth_fire_buffer(ctx: &web::AudioContext) -> anyhow::Result<web::AudioBuffer> {
    let sr = ctx.sample_rate();
    let len = (sr * FIRE_SOUND_SEC) as u32;
    let buffer = ctx.create_buffer(1, len.max(1), sr).map_err(js_err)?;

    // xorshift32 keeps the burst identical between sessions
    let mut seed: u32 = 0x9E37_79B9;
    let dt = 1.0 / sr;
    let mut samples: Vec<f32> = (0..len)
        .map(|i| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let n = (seed as f32 / u32::MAX as f32) * 2.0 - 1.0;
            let t = i as f32 * dt;
            n * (-t / FIRE_SOUND_DECAY_SEC).exp() * FIRE_SOUND_GAIN
        })
        .collect();
    buffer.copy_to_channel(&mut samples, 0).map_err(js_err)?;
    Ok(buffer)
}

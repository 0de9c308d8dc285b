//! Headless harness for tuning the spring filter and controller.
//! Usage: cargo run -p fps-native -- [--ticks N] [--dt SECONDS] [--target X,Y]

use std::env;

use anyhow::Context;
use fps_core::{
    BodyState, ControllerConfig, ControllerEvent, FirstPersonController, SoundRegistry, Spring,
    Weapon,
};
use glam::{Vec2, Vec3};
use instant::Instant;

#[derive(Debug, Clone, Copy)]
struct HarnessArgs {
    ticks: usize,
    dt: f32,
    target: Vec2,
}

impl Default for HarnessArgs {
    fn default() -> Self {
        Self {
            ticks: 120,
            dt: 0.016,
            target: Vec2::new(1.0, 0.0),
        }
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .skip_while(|a| a.as_str() != flag)
        .nth(1)
        .map(String::as_str)
}

fn parse_args(args: &[String]) -> anyhow::Result<HarnessArgs> {
    let mut out = HarnessArgs::default();
    if let Some(v) = flag_value(args, "--ticks") {
        out.ticks = v.parse().with_context(|| format!("invalid --ticks {v:?}"))?;
    }
    if let Some(v) = flag_value(args, "--dt") {
        out.dt = v.parse().with_context(|| format!("invalid --dt {v:?}"))?;
    }
    if let Some(v) = flag_value(args, "--target") {
        let (x, y) = v
            .split_once(',')
            .ok_or_else(|| anyhow::anyhow!("--target expects X,Y, got {v:?}"))?;
        out.target = Vec2::new(
            x.trim().parse().context("invalid --target x")?,
            y.trim().parse().context("invalid --target y")?,
        );
    }
    Ok(out)
}

/// Step response from rest toward the target; logs a sparse trace.
fn run_step_response(args: &HarnessArgs) -> Vec2 {
    let mut spring = Spring::new(Vec2::ZERO);
    let stride = (args.ticks / 10).max(1);
    let mut peak = Vec2::splat(f32::MIN);
    let mut out = Vec2::ZERO;
    for i in 0..args.ticks {
        out = spring.update(args.target, args.dt);
        peak = peak.max(out);
        if i % stride == 0 || i + 1 == args.ticks {
            log::info!("[spring] tick {:4} -> ({:.5}, {:.5})", i, out.x, out.y);
        }
    }
    log::info!(
        "[spring] final=({:.5},{:.5}) peak=({:.5},{:.5}) error={:.2e}",
        out.x,
        out.y,
        peak.x,
        peak.y,
        (args.target - out).length()
    );
    out
}

/// Scripted walk with mouse sweep and a few shots.
fn run_walk(args: &HarnessArgs) {
    let mut controller = FirstPersonController::new(ControllerConfig::default());
    controller.set_enabled(true);
    controller.on_pointer_lock_change(true);
    let mut weapon = Weapon::default();
    weapon.set_sound_loaded(true);
    controller.equip(weapon);

    let mut sounds = SoundRegistry::new();
    let mut body = BodyState {
        position: Vec3::new(0.0, 2.0, 0.0),
        ..Default::default()
    };
    controller.on_contact(Vec3::Y);
    controller.on_key("KeyW", true, &mut body);

    for i in 0..args.ticks {
        if i % 20 == 0 {
            controller.on_mouse_move(15.0, -4.0);
        }
        if i % 30 == 0 {
            if let Some(ControllerEvent::Fire(outcome)) = controller.on_mouse_down(0, &mut sounds) {
                log::debug!("[walk] tick {} fire {:?}", i, outcome);
            }
        }
        body.position += body.velocity * args.dt;
        let pose = controller.update(args.dt, &mut body);
        if i % 30 == 0 {
            log::info!(
                "[walk] tick {:4} yaw={:+.3} pitch={:+.3} bob=({:+.4},{:+.4}) flash={}",
                i,
                pose.yaw,
                pose.pitch,
                pose.weapon_offset.x,
                pose.weapon_offset.y,
                pose.muzzle_flash
            );
        }
    }

    // Nothing plays in the harness; every shot ends immediately afterwards.
    let ids: Vec<_> = sounds.instances().iter().map(|s| s.id).collect();
    for id in ids {
        if let Some(weapon) = controller.weapon_mut() {
            if let Err(e) = weapon.on_sound_ended(id, &mut sounds) {
                log::warn!("[walk] {}", e);
            }
        }
    }
    log::info!(
        "[walk] done at ({:.2},{:.2},{:.2}) shots={} live_sounds={}",
        body.position.x,
        body.position.y,
        body.position.z,
        controller.weapon().map(Weapon::shots_fired).unwrap_or(0),
        sounds.live_count()
    );
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    let argv: Vec<String> = env::args().collect();
    let args = parse_args(&argv)?;
    log::info!(
        "fps-native: ticks={} dt={} target=({}, {})",
        args.ticks,
        args.dt,
        args.target.x,
        args.target.y
    );

    let started = Instant::now();
    run_step_response(&args);
    run_walk(&args);
    log::info!("fps-native finished in {:?}", started.elapsed());
    Ok(())
}

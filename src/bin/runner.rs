//! Tai Chi field runner
//!
//! Loads a field config from JSON and runs it headless at a fixed 60 Hz
//! step, switching to the opposite mode halfway through, then prints the
//! final field stats as JSON.
//!
//! Usage: `taichi-runner [config.json] [frames]`
//!
//! Set `RUST_LOG=debug` for per-mode progress.

use std::env;
use std::path::PathBuf;
use taichi_field::prelude::*;

const DEFAULT_FRAMES: u64 = 600;
const FRAME_STEP: f32 = 1.0 / 60.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    let config = match args.get(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            match FieldConfig::load(&path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("failed to load config from {:?}: {}", path, e);
                    log::warn!("using default configuration");
                    FieldConfig::default()
                }
            }
        }
        None => {
            log::info!("no config file given, using defaults");
            FieldConfig::default()
        }
    };

    let frames = match args.get(2).map(|s| s.parse::<u64>()) {
        Some(Ok(frames)) => frames,
        Some(Err(e)) => {
            log::warn!("invalid frame count {:?}: {}", args[2], e);
            DEFAULT_FRAMES
        }
        None => DEFAULT_FRAMES,
    };

    let mut session = match Simulation::from_config(&config)
        .with_time(Time::fixed(FRAME_STEP))
        .build()
    {
        Ok(session) => session,
        Err(e) => {
            log::error!("cannot build field {:?}: {}", config.name, e);
            std::process::exit(1);
        }
    };

    log::info!(
        "running {:?}: {} particles, {} frames, starting in {} mode",
        config.name,
        config.particle_count,
        frames,
        session.mode()
    );

    let switch_at = frames / 2;
    for frame in 0..frames {
        if frame == switch_at && frame > 0 {
            let stats = session.stats();
            log::debug!(
                "{} mode settled: mean distance to target {:.3}",
                session.mode(),
                stats.mean_distance_to_target
            );
            let mode = session.toggle_mode();
            log::info!("frame {}: switched to {} ({})", frame, mode, mode.label());
        }
        session.frame();
    }

    let stats = session.stats();
    log::info!(
        "done after {} frames ({:.2}s simulated), rotation {:?}",
        session.frames(),
        session.time().elapsed(),
        session.rotation().to_array()
    );

    match serde_json::to_string_pretty(&stats) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("failed to serialize stats: {}", e);
            std::process::exit(1);
        }
    }
}

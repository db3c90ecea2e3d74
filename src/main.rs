//! Meteor Shooter entry point
//!
//! Runs one headless session: the autopilot plays, cues go to the log and
//! frames are counted instead of drawn.

use std::sync::Arc;

use glam::Vec2;

use meteor_shooter::audio::LogBackend;
use meteor_shooter::consts::TITLE;
use meteor_shooter::platform::{AutoPilot, SystemClock};
use meteor_shooter::renderer::HeadlessRenderer;
use meteor_shooter::{Assets, Error, GameLoop, Settings};

fn run() -> Result<(), Error> {
    let settings = Settings::load()?;

    let assets = match &settings.asset_dir {
        Some(dir) => Assets::load(dir)?,
        None => {
            log::warn!("No asset_dir configured, using generated placeholder sprites");
            Assets::placeholder(settings.window_width, settings.window_height)
        }
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    let bounds = Vec2::new(settings.window_width as f32, settings.window_height as f32);
    let pilot = AutoPilot::new(bounds, settings.demo_fire_every, settings.demo_frames);

    let mut game = GameLoop::new(
        settings,
        Arc::new(assets),
        seed,
        SystemClock::new(),
        pilot,
        HeadlessRenderer::new(),
        LogBackend,
    );
    let summary = game.run();
    log::info!("Final score: {} (seed {})", summary.score, seed);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("{} (headless) starting...", TITLE);

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

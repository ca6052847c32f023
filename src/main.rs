//! Drift Asteroids entry point
//!
//! There is no native window backend yet, so the binary runs a headless demo:
//! the ship thrusts and turns on a fixed script while asteroids drift, and the
//! outcome is logged. Pass a settings JSON path as the only argument to
//! override the defaults.

use std::process::ExitCode;

use drift_asteroids::consts::WINDOW_TITLE;
use drift_asteroids::platform::{HeadlessAssets, HeadlessPlatform, Key};
use drift_asteroids::sim::Bounds;
use drift_asteroids::{Game, GameError, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("{WINDOW_TITLE} (native, headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), GameError> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    let fps = u64::from(settings.target_fps);
    let mut platform = HeadlessPlatform::new(
        settings.window_width,
        settings.window_height,
        settings.frame_dt(),
    )
    .with_frame_limit(u64::from(settings.demo_frames))
    // Half a second of thrust, a turn, then a longer burn
    .hold_during(Key::W, 0, fps / 2)
    .hold_during(Key::D, fps / 2, fps)
    .hold_during(Key::W, fps, 3 * fps)
    .hold_during(Key::Space, 2 * fps, 2 * fps + 1);

    let mut assets = HeadlessAssets::square([
        settings.player_sprite.as_str(),
        settings.asteroid_sprite.as_str(),
    ]);

    let bounds = Bounds::from_screen(settings.window_width, settings.window_height);
    let mut game = Game::setup(settings, &mut assets, bounds)?;
    let summary = game.run(&mut platform);

    println!(
        "seed {} | {} frames | ship {} | {} asteroids on screen, {} lost | {} fire request(s)",
        summary.seed,
        summary.frames,
        if summary.player_alive { "survived" } else { "destroyed" },
        summary.live_asteroids,
        summary.asteroids_lost,
        summary.fire_requests
    );
    Ok(())
}

//! Frame driver
//!
//! Owns the simulation state for one session and runs the
//! input -> simulate -> render sequence once per host frame.

use rand::Rng;

use crate::error::GameError;
use crate::platform::{AssetLoader, Canvas, Platform};
use crate::renderer;
use crate::settings::Settings;
use crate::sim::{Bounds, GameEvent, GamePhase, GameState, KeyBindings, SpriteSet, TickInput, tick};

/// What happened over a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub player_alive: bool,
    pub live_asteroids: usize,
    pub asteroids_lost: u32,
    pub fire_requests: u32,
}

/// Game instance holding all state
pub struct Game {
    pub settings: Settings,
    pub state: GameState,
    pub bindings: KeyBindings,
    asteroids_lost: u32,
    fire_requests: u32,
}

impl Game {
    /// Load sprites and spawn the ship and asteroids inside `bounds`.
    /// Any failure here is fatal to the session.
    pub fn setup(
        settings: Settings,
        assets: &mut impl AssetLoader,
        bounds: Bounds,
    ) -> Result<Self, GameError> {
        settings.validate()?;

        let sprites = SpriteSet {
            player: assets.load_image(&settings.player_sprite)?,
            asteroid: assets.load_image(&settings.asteroid_sprite)?,
        };

        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let state = GameState::spawn(&settings, sprites, bounds, seed);
        log::info!(
            "Spawned ship and {} asteroids on {}x{} (seed {})",
            state.asteroids.len(),
            bounds.width,
            bounds.height,
            seed
        );

        Ok(Self {
            settings,
            state,
            bindings: KeyBindings::default(),
            asteroids_lost: 0,
            fire_requests: 0,
        })
    }

    /// Run one frame against the host
    pub fn frame<P: Platform + Canvas>(&mut self, platform: &mut P) {
        platform.begin_frame();

        let dt = platform.frame_time();
        let bounds = Bounds::from_screen(platform.screen_width(), platform.screen_height());
        let input = TickInput::from_platform(&*platform, &self.bindings);

        tick(&mut self.state, &input, dt, bounds);
        self.handle_events();

        renderer::render(&self.state, &mut *platform, &self.settings);
        platform.end_frame();
    }

    /// Loop until the host asks to close, then close the window
    pub fn run<P: Platform + Canvas>(&mut self, platform: &mut P) -> RunSummary {
        while !platform.should_close() {
            self.frame(platform);
        }
        platform.close_window();

        let summary = self.summary();
        log::info!(
            "Run finished after {} frames: ship {}, {} asteroids left",
            summary.frames,
            if summary.player_alive { "alive" } else { "destroyed" },
            summary.live_asteroids
        );
        summary
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.state.seed,
            frames: self.state.time_frames,
            player_alive: self.state.player.alive,
            live_asteroids: self.state.live_asteroid_count(),
            asteroids_lost: self.asteroids_lost,
            fire_requests: self.fire_requests,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }

    fn handle_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::FireRequested => self.fire_requests += 1,
                GameEvent::AsteroidLost { .. } | GameEvent::AsteroidDestroyed { .. } => {
                    self.asteroids_lost += 1
                }
                GameEvent::PlayerDestroyed { asteroid } => {
                    log::info!(
                        "Game over on frame {} (hit asteroid {})",
                        self.state.time_frames,
                        asteroid
                    );
                }
            }
        }
    }
}

//! Game state and core simulation types
//!
//! The ship is held apart from the asteroids so the "player comes first"
//! rule is a property of the type rather than of list order.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boundary::{Bounds, PlayerBoundary};
use super::collision::CollisionShape;
use super::entity::{Entity, EntityKind};
use crate::consts::ASTEROID_MAX_SPEED;
use crate::error::GameError;
use crate::platform::ImageHandle;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship is alive
    Playing,
    /// Ship was destroyed; asteroids keep drifting
    GameOver,
}

/// Something that happened during a tick, for the frame driver to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fire was pressed. Nothing spawns yet; hosts may hook this.
    FireRequested,
    /// The ship hit the asteroid at this index
    PlayerDestroyed { asteroid: usize },
    /// Asteroid drifted off screen
    AsteroidLost { asteroid: usize },
    /// Asteroid was destroyed by hitting the ship
    AsteroidDestroyed { asteroid: usize },
}

/// Physics constants and rule choices for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub friction: f32,
    pub thrust_power: f32,
    pub rotation_rate: f32,
    pub player_boundary: PlayerBoundary,
    pub collision_shape: CollisionShape,
    pub destroy_asteroid_on_hit: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for Tuning {
    fn from(settings: &Settings) -> Self {
        Self {
            friction: settings.friction,
            thrust_power: settings.thrust_power,
            rotation_rate: settings.rotation_rate,
            player_boundary: settings.player_boundary,
            collision_shape: settings.collision_shape,
            destroy_asteroid_on_hit: settings.destroy_asteroid_on_hit,
        }
    }
}

/// Sprites shared by every entity of a kind
#[derive(Debug, Clone, Copy)]
pub struct SpriteSet {
    pub player: ImageHandle,
    pub asteroid: ImageHandle,
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed used to place the asteroids
    pub seed: u64,
    pub phase: GamePhase,
    pub tuning: Tuning,
    /// Asteroids requested at setup
    pub asteroid_count: u32,
    /// Elapsed time of the current frame (seconds)
    pub frame_time: f32,
    /// Frames simulated so far
    pub time_frames: u64,
    pub player: Entity,
    /// Creation order, never reordered or shrunk
    pub asteroids: Vec<Entity>,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a state from an explicit ship and asteroid list
    pub fn new(player: Entity, asteroids: Vec<Entity>, tuning: Tuning) -> Self {
        let phase = if player.alive {
            GamePhase::Playing
        } else {
            GamePhase::GameOver
        };
        Self {
            seed: 0,
            phase,
            tuning,
            asteroid_count: asteroids.len() as u32,
            frame_time: 0.0,
            time_frames: 0,
            player,
            asteroids,
            events: Vec::new(),
        }
    }

    /// Build a state from a flat list whose first element is the ship
    pub fn from_entities(entities: Vec<Entity>, tuning: Tuning) -> Result<Self, GameError> {
        let mut iter = entities.into_iter();
        let player = iter.next().ok_or_else(|| {
            GameError::InvariantViolation("entity list is empty, no player at index 0".into())
        })?;
        if player.kind != EntityKind::Player {
            return Err(GameError::InvariantViolation(format!(
                "entity at index 0 is {:?}, expected Player",
                player.kind
            )));
        }

        let asteroids: Vec<Entity> = iter.collect();
        if let Some(i) = asteroids.iter().position(Entity::is_player) {
            return Err(GameError::InvariantViolation(format!(
                "second player found at index {}",
                i + 1
            )));
        }

        Ok(Self::new(player, asteroids, tuning))
    }

    /// Place the ship at screen center and scatter `settings.asteroid_count`
    /// asteroids with random positions and drift, deterministically from `seed`
    pub fn spawn(settings: &Settings, sprites: SpriteSet, bounds: Bounds, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let player = Entity::player(sprites.player, bounds.center());

        let max_x = (bounds.width as u32).max(1);
        let max_y = (bounds.height as u32).max(1);
        let asteroids = (0..settings.asteroid_count)
            .map(|_| {
                let pos = Vec2::new(
                    rng.random_range(0..max_x) as f32,
                    rng.random_range(0..max_y) as f32,
                );
                let vel = Vec2::new(
                    rng.random_range(-ASTEROID_MAX_SPEED..ASTEROID_MAX_SPEED) as f32,
                    rng.random_range(-ASTEROID_MAX_SPEED..ASTEROID_MAX_SPEED) as f32,
                );
                Entity::asteroid(sprites.asteroid, pos, vel)
            })
            .collect();

        let mut state = Self::new(player, asteroids, Tuning::from(settings));
        state.seed = seed;
        state
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.player
    }

    pub fn asteroids(&self) -> impl Iterator<Item = &Entity> {
        self.asteroids.iter()
    }

    /// Ship first, then asteroids in creation order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        std::iter::once(&self.player).chain(self.asteroids.iter())
    }

    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        std::iter::once(&mut self.player).chain(self.asteroids.iter_mut())
    }

    pub fn live_asteroid_count(&self) -> usize {
        self.asteroids.iter().filter(|a| a.alive).count()
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

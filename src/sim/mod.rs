//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform calls:
//! - Frame time and screen size arrive as parameters
//! - Seeded RNG only, used once at setup
//! - Stable iteration order (ship first, then asteroids by creation)

pub mod boundary;
pub mod collision;
pub mod entity;
pub mod input;
pub mod motion;
pub mod state;
pub mod tick;

pub use boundary::{Bounds, PlayerBoundary, apply_asteroid_boundary, apply_player_boundary, wrap_position};
pub use collision::{CollisionShape, boxes_overlap, circles_overlap, entities_collide, resolve_collisions};
pub use entity::{Entity, EntityKind};
pub use input::{KeyBindings, TickInput, apply_input};
pub use motion::{apply_friction, integrate};
pub use state::{GameEvent, GamePhase, GameState, SpriteSet, Tuning};
pub use tick::tick;

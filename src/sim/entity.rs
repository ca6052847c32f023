//! Entities: the ship and the asteroids
//!
//! One flat record type for anything simulated and drawn. The kind tag decides
//! which per-frame rules apply instead of separate types per role.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::platform::ImageHandle;

/// Role of an entity in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Takes input and friction, wraps at the screen edge
    Player,
    /// Drifts, dies when it leaves the screen
    Asteroid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Screen coordinates, origin top-left, y down
    pub pos: Vec2,
    /// Units per second
    pub vel: Vec2,
    /// Degrees, 0 = facing +x
    pub rotation: f32,
    /// Uniform sprite scale
    pub scale: f32,
    pub sprite: ImageHandle,
    /// Permanent once false
    pub alive: bool,
    /// Sprite animation bookkeeping (accumulates, nothing reads it yet)
    pub animation_timer: f32,
    pub current_frame: u32,
}

impl Entity {
    pub fn new(kind: EntityKind, sprite: ImageHandle, pos: Vec2, vel: Vec2) -> Self {
        Self {
            kind,
            pos,
            vel,
            rotation: 0.0,
            scale: 1.0,
            sprite,
            alive: true,
            animation_timer: 0.0,
            current_frame: 0,
        }
    }

    pub fn player(sprite: ImageHandle, pos: Vec2) -> Self {
        Self::new(EntityKind::Player, sprite, pos, Vec2::ZERO)
    }

    pub fn asteroid(sprite: ImageHandle, pos: Vec2, vel: Vec2) -> Self {
        Self::new(EntityKind::Asteroid, sprite, pos, vel)
    }

    pub fn is_player(&self) -> bool {
        self.kind == EntityKind::Player
    }

    /// Sprite size after scaling
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.sprite.width as f32, self.sprite.height as f32) * self.scale
    }

    /// Collision radius: half the scaled sprite width
    pub fn radius(&self) -> f32 {
        self.size().x / 2.0
    }

    /// Mark dead. Returns true if this call changed the flag.
    pub fn kill(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite(w: u32, h: u32) -> ImageHandle {
        ImageHandle {
            id: 1,
            width: w,
            height: h,
        }
    }

    #[test]
    fn test_size_and_radius_follow_scale() {
        let mut e = Entity::asteroid(sprite(32, 16), Vec2::ZERO, Vec2::ZERO);
        assert_eq!(e.size(), Vec2::new(32.0, 16.0));
        assert_eq!(e.radius(), 16.0);

        e.scale = 2.0;
        assert_eq!(e.size(), Vec2::new(64.0, 32.0));
        assert_eq!(e.radius(), 32.0);
    }

    #[test]
    fn test_kill_reports_transition_once() {
        let mut e = Entity::player(sprite(8, 8), Vec2::ZERO);
        assert!(e.is_player());
        assert!(e.kill());
        assert!(!e.alive);
        assert!(!e.kill());
        assert!(!e.alive);
    }
}

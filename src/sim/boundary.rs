//! Screen-edge rules
//!
//! The ship either wraps to the opposite edge or stops at the edge. Asteroids
//! that leave the screen die for good.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Visible rectangle, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_screen(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Which axes `pos` is outside of (edges count as inside)
    pub fn out_of_bounds(&self, pos: Vec2) -> (bool, bool) {
        (
            pos.x < 0.0 || pos.x > self.width,
            pos.y < 0.0 || pos.y > self.height,
        )
    }
}

/// What the ship does at the screen edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerBoundary {
    /// Teleport to the opposite edge
    #[default]
    Wrap,
    /// Zero the velocity component that points off screen; no teleport
    StopAtEdge,
}

/// Wrap each axis independently: below 0 goes to the far edge, past the far edge goes to 0
pub fn wrap_position(pos: Vec2, bounds: Bounds) -> Vec2 {
    let wrap = |v: f32, max: f32| {
        if v < 0.0 {
            max
        } else if v > max {
            0.0
        } else {
            v
        }
    };
    Vec2::new(wrap(pos.x, bounds.width), wrap(pos.y, bounds.height))
}

/// Apply the ship's edge rule
pub fn apply_player_boundary(player: &mut Entity, bounds: Bounds, policy: PlayerBoundary) {
    match policy {
        PlayerBoundary::Wrap => {
            player.pos = wrap_position(player.pos, bounds);
        }
        PlayerBoundary::StopAtEdge => {
            let (out_x, out_y) = bounds.out_of_bounds(player.pos);
            if out_x {
                player.vel.x = 0.0;
            }
            if out_y {
                player.vel.y = 0.0;
            }
        }
    }
}

/// Kill an asteroid outside the screen on either axis.
/// Returns true only when this call killed it.
pub fn apply_asteroid_boundary(asteroid: &mut Entity, bounds: Bounds) -> bool {
    if !asteroid.alive {
        return false;
    }
    let (out_x, out_y) = bounds.out_of_bounds(asteroid.pos);
    if out_x || out_y {
        return asteroid.kill();
    }
    false
}

//! Drift Asteroids - a minimal wrapping-screen arcade core
//!
//! Core modules:
//! - `sim`: Per-frame simulation (input, motion, boundaries, collisions)
//! - `renderer`: Render pass that turns live entities into sprite draw calls
//! - `platform`: Window/input/drawing capabilities supplied by the host
//! - `game`: Frame driver tying the above together
//! - `settings`: Startup configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use game::{Game, RunSummary};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default window size (pixels)
    pub const WINDOW_WIDTH: u32 = 1280;
    pub const WINDOW_HEIGHT: u32 = 720;
    pub const WINDOW_TITLE: &str = "Asteroids";
    pub const TARGET_FPS: u32 = 60;

    /// Ship rotation speed (degrees per second)
    pub const ROTATION_RATE: f32 = 200.0;
    /// Thrust acceleration along the ship's heading (units/s²)
    pub const THRUST_POWER: f32 = 300.0;
    /// Per-frame velocity damping applied to the ship
    pub const FRICTION: f32 = 0.98;

    /// Asteroids spawned at startup (the ship makes it an even 100 entities)
    pub const ASTEROID_COUNT: u32 = 99;
    /// Asteroid velocity components are drawn from [-MAX, MAX)
    pub const ASTEROID_MAX_SPEED: i32 = 100;

    pub const PLAYER_SPRITE: &str = "images/spaceship.png";
    pub const ASTEROID_SPRITE: &str = "images/asteroid.png";

    /// Where the FPS overlay is drawn
    pub const FPS_OVERLAY_POS: (i32, i32) = (10, 10);
}

/// Unit vector pointing along `degrees` (0 = +x, positive turns toward +y)
#[inline]
pub fn from_angle(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Normalized angle to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_angle_axes() {
        let right = from_angle(0.0);
        assert!((right.x - 1.0).abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);

        // Screen y points down, so 90° faces down the screen
        let down = from_angle(90.0);
        assert!(down.x.abs() < 1e-6);
        assert!((down.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_angle_is_unit() {
        for deg in [-725.0, -90.0, 13.0, 45.0, 181.5, 359.9, 1080.0] {
            assert!((from_angle(deg).length() - 1.0).abs() < 1e-5, "{deg}");
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-4);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-4);
        assert!(normalize_degrees(-1e-7) < 360.0);
    }
}

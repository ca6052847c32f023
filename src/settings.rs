//! Game settings
//!
//! A small set of named tunables fixed at startup. Read from a JSON file when
//! one is supplied, otherwise the defaults in `consts` apply.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::{CollisionShape, PlayerBoundary};

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// Number of asteroids spawned at startup
    pub asteroid_count: u32,
    /// RNG seed for asteroid placement (random when absent)
    pub seed: Option<u64>,

    // === Ship handling ===
    /// Thrust acceleration (units/s²)
    pub thrust_power: f32,
    /// Per-frame velocity damping, must be in (0, 1)
    pub friction: f32,
    /// Rotation speed (degrees/s)
    pub rotation_rate: f32,

    // === Rules ===
    /// What the ship does at the screen edge
    pub player_boundary: PlayerBoundary,
    /// Geometry used for ship/asteroid hits
    pub collision_shape: CollisionShape,
    /// Also kill the asteroid that destroyed the ship
    pub destroy_asteroid_on_hit: bool,

    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,

    // === Assets ===
    pub player_sprite: String,
    pub asteroid_sprite: String,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    /// Frames the headless demo runs before closing
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asteroid_count: ASTEROID_COUNT,
            seed: None,

            thrust_power: THRUST_POWER,
            friction: FRICTION,
            rotation_rate: ROTATION_RATE,

            player_boundary: PlayerBoundary::default(),
            collision_shape: CollisionShape::default(),
            destroy_asteroid_on_hit: false,

            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            target_fps: TARGET_FPS,

            player_sprite: PLAYER_SPRITE.to_string(),
            asteroid_sprite: ASTEROID_SPRITE.to_string(),

            show_fps: true,

            demo_frames: 10 * TARGET_FPS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(GameError::Config(format!(
                "friction must be in (0, 1), got {}",
                self.friction
            )));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(GameError::Config(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.target_fps == 0 {
            return Err(GameError::Config("target_fps must be non-zero".into()));
        }
        if !self.thrust_power.is_finite() || !self.rotation_rate.is_finite() {
            return Err(GameError::Config(
                "thrust_power and rotation_rate must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Fixed frame time the headless demo advances by
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.window_width, 1280);
        assert_eq!(settings.window_height, 720);
        assert_eq!(settings.friction, 0.98);
        assert_eq!(settings.player_boundary, PlayerBoundary::Wrap);
        assert_eq!(settings.collision_shape, CollisionShape::Circle);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "asteroid_count": 5, "seed": 42, "player_boundary": "StopAtEdge" }"#)
                .unwrap();
        assert_eq!(settings.asteroid_count, 5);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.player_boundary, PlayerBoundary::StopAtEdge);
        assert_eq!(settings.thrust_power, THRUST_POWER);
    }

    #[test]
    fn test_bad_friction_rejected() {
        for friction in [0.0, 1.0, 1.5, -0.2] {
            let err = Settings::from_json(&format!(r#"{{ "friction": {friction} }}"#)).unwrap_err();
            assert!(matches!(err, GameError::Config(_)), "{friction}");
        }
    }

    #[test]
    fn test_zero_window_rejected() {
        let settings = Settings {
            window_width: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }

    #[test]
    fn test_frame_dt() {
        let settings = Settings::default();
        assert!((settings.frame_dt() - 1.0 / 60.0).abs() < 1e-7);
    }
}

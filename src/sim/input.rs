//! Ship controls
//!
//! Raw key state is sampled into a `TickInput` once per frame so the
//! simulation itself never polls a device.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::from_angle;
use crate::normalize_degrees;
use crate::platform::{Key, Platform};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    /// No projectiles yet; only raises `GameEvent::FireRequested`
    pub fire: bool,
}

/// Which key drives which control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub rotate_left: Key,
    pub rotate_right: Key,
    pub thrust: Key,
    pub fire: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            rotate_left: Key::A,
            rotate_right: Key::D,
            thrust: Key::W,
            fire: Key::Space,
        }
    }
}

impl TickInput {
    /// Sample the host keyboard
    pub fn from_platform(platform: &impl Platform, bindings: &KeyBindings) -> Self {
        Self {
            rotate_left: platform.is_key_down(bindings.rotate_left),
            rotate_right: platform.is_key_down(bindings.rotate_right),
            thrust: platform.is_key_down(bindings.thrust),
            fire: platform.is_key_down(bindings.fire),
        }
    }
}

/// Apply rotation and thrust to the ship. Returns whether fire was requested.
///
/// Thrust is an acceleration along the current heading, integrated over `dt`,
/// so holding it keeps adding speed frame after frame.
pub fn apply_input(
    player: &mut Entity,
    input: &TickInput,
    dt: f32,
    rotation_rate: f32,
    thrust_power: f32,
) -> bool {
    if input.rotate_left {
        player.rotation -= rotation_rate * dt;
    }
    if input.rotate_right {
        player.rotation += rotation_rate * dt;
    }
    player.rotation = normalize_degrees(player.rotation);

    if input.thrust {
        player.vel += from_angle(player.rotation) * thrust_power * dt;
    }

    input.fire
}

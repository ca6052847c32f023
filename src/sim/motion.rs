//! Motion integration
//!
//! Explicit Euler: position += velocity * dt. Friction is a flat per-frame
//! multiplier on the ship, independent of dt.

use super::entity::Entity;

/// Damp the ship's velocity once
#[inline]
pub fn apply_friction(player: &mut Entity, friction: f32) {
    player.vel *= friction;
}

/// Advance one entity. Dead entities stay where they died.
#[inline]
pub fn integrate(entity: &mut Entity, dt: f32) {
    if !entity.alive {
        return;
    }
    entity.pos += entity.vel * dt;
    entity.animation_timer += dt;
}

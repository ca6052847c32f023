//! Per-frame simulation step
//!
//! Order matters: input, friction, integration, boundaries, collisions.

use super::boundary::{Bounds, apply_asteroid_boundary, apply_player_boundary};
use super::collision::resolve_collisions;
use super::input::{TickInput, apply_input};
use super::motion::{apply_friction, integrate};
use super::state::{GameEvent, GameState};

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, bounds: Bounds) {
    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame time {dt}");
        0.0
    };
    state.frame_time = dt;
    state.time_frames += 1;

    let tuning = state.tuning;

    // Ship controls and friction (dead ships ignore input)
    if state.player.alive {
        let fire = apply_input(
            &mut state.player,
            input,
            dt,
            tuning.rotation_rate,
            tuning.thrust_power,
        );
        if fire {
            log::debug!("Fire requested on frame {}", state.time_frames);
            state.push_event(GameEvent::FireRequested);
        }
        apply_friction(&mut state.player, tuning.friction);
    }

    for entity in state.entities_mut() {
        integrate(entity, dt);
    }

    // Screen edges
    if state.player.alive {
        apply_player_boundary(&mut state.player, bounds, tuning.player_boundary);
    }
    let mut lost = Vec::new();
    for (i, asteroid) in state.asteroids.iter_mut().enumerate() {
        if apply_asteroid_boundary(asteroid, bounds) {
            lost.push(GameEvent::AsteroidLost { asteroid: i });
        }
    }
    if !lost.is_empty() {
        log::debug!("{} asteroid(s) drifted off screen", lost.len());
        state.events.extend(lost);
    }

    resolve_collisions(state);
}

//! Ship vs asteroid collision detection
//!
//! Both tests are symmetric in their arguments. The circle test is the
//! default; the box test matches sprites that are far from round.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::state::{GameEvent, GamePhase, GameState};

/// Geometry used for hit tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionShape {
    /// Center distance against the sum of radii (half the scaled sprite width)
    #[default]
    Circle,
    /// Axis-aligned scaled sprite boxes centered on position
    Aabb,
}

/// Circles overlap when their centers are closer than the sum of radii
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) < reach * reach
}

/// Boxes given by center and full size; touching edges do not count
#[inline]
pub fn boxes_overlap(a_center: Vec2, a_size: Vec2, b_center: Vec2, b_size: Vec2) -> bool {
    let a_min = a_center - a_size / 2.0;
    let a_max = a_center + a_size / 2.0;
    let b_min = b_center - b_size / 2.0;
    let b_max = b_center + b_size / 2.0;
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// Hit test between two entities (liveness is the caller's concern)
pub fn entities_collide(a: &Entity, b: &Entity, shape: CollisionShape) -> bool {
    match shape {
        CollisionShape::Circle => circles_overlap(a.pos, a.radius(), b.pos, b.radius()),
        CollisionShape::Aabb => boxes_overlap(a.pos, a.size(), b.pos, b.size()),
    }
}

/// Test the ship against every live asteroid.
///
/// The first hit on a live ship kills it and ends the game. Later hits in the
/// same frame are still counted but change nothing else unless asteroids are
/// configured to die on impact. Returns the number of overlapping asteroids.
pub fn resolve_collisions(state: &mut GameState) -> usize {
    let shape = state.tuning.collision_shape;
    let destroy_asteroid = state.tuning.destroy_asteroid_on_hit;
    let mut hits = 0;
    let mut events = Vec::new();

    for (i, asteroid) in state.asteroids.iter_mut().enumerate() {
        if !asteroid.alive || !entities_collide(&state.player, asteroid, shape) {
            continue;
        }
        hits += 1;

        if state.player.kill() {
            log::info!(
                "Ship destroyed by asteroid {} at ({:.1}, {:.1})",
                i,
                state.player.pos.x,
                state.player.pos.y
            );
            events.push(GameEvent::PlayerDestroyed { asteroid: i });
            state.phase = GamePhase::GameOver;

            if destroy_asteroid && asteroid.kill() {
                events.push(GameEvent::AsteroidDestroyed { asteroid: i });
            }
        }
    }

    state.events.extend(events);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ImageHandle;
    use crate::sim::state::Tuning;

    const SPRITE: ImageHandle = ImageHandle {
        id: 1,
        width: 32,
        height: 32,
    };

    fn state_with(player_pos: Vec2, rocks: &[Vec2], tuning: Tuning) -> GameState {
        let player = Entity::player(SPRITE, player_pos);
        let asteroids = rocks
            .iter()
            .map(|&p| Entity::asteroid(SPRITE, p, Vec2::ZERO))
            .collect();
        GameState::new(player, asteroids, tuning)
    }

    #[test]
    fn test_same_position_collides() {
        let mut state = state_with(Vec2::new(100.0, 100.0), &[Vec2::new(100.0, 100.0)], Tuning::default());
        assert_eq!(state.player.radius(), 16.0);
        assert_eq!(resolve_collisions(&mut state), 1);
        assert!(!state.player.alive);
        assert!(state.asteroids[0].alive);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.drain_events(), vec![GameEvent::PlayerDestroyed { asteroid: 0 }]);
    }

    #[test]
    fn test_circle_touching_is_miss() {
        // Radii 16 + 16 = 32, centers exactly 32 apart
        assert!(!circles_overlap(Vec2::ZERO, 16.0, Vec2::new(32.0, 0.0), 16.0));
        assert!(circles_overlap(Vec2::ZERO, 16.0, Vec2::new(31.9, 0.0), 16.0));
        // Diagonal: box test would hit, circle test does not
        let a = Vec2::ZERO;
        let b = Vec2::new(28.0, 28.0);
        assert!(!circles_overlap(a, 16.0, b, 16.0));
        assert!(boxes_overlap(a, Vec2::splat(32.0), b, Vec2::splat(32.0)));
    }

    #[test]
    fn test_box_overlap() {
        let size = Vec2::new(32.0, 16.0);
        assert!(boxes_overlap(Vec2::ZERO, size, Vec2::new(31.0, 15.0), size));
        assert!(!boxes_overlap(Vec2::ZERO, size, Vec2::new(32.0, 0.0), size));
        assert!(!boxes_overlap(Vec2::ZERO, size, Vec2::new(0.0, 16.0), size));
    }

    #[test]
    fn test_collision_is_symmetric() {
        let ship = Entity::player(SPRITE, Vec2::new(10.0, 10.0));
        let mut rock = Entity::asteroid(SPRITE, Vec2::new(30.0, 25.0), Vec2::ZERO);
        rock.scale = 1.5;
        for shape in [CollisionShape::Circle, CollisionShape::Aabb] {
            assert_eq!(
                entities_collide(&ship, &rock, shape),
                entities_collide(&rock, &ship, shape)
            );
        }
    }

    #[test]
    fn test_dead_asteroids_ignored() {
        let mut state = state_with(Vec2::new(100.0, 100.0), &[Vec2::new(100.0, 100.0)], Tuning::default());
        state.asteroids[0].kill();
        assert_eq!(resolve_collisions(&mut state), 0);
        assert!(state.player.alive);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_multiple_hits_single_death_event() {
        let mut state = state_with(
            Vec2::new(100.0, 100.0),
            &[Vec2::new(90.0, 100.0), Vec2::new(500.0, 500.0), Vec2::new(110.0, 100.0)],
            Tuning::default(),
        );
        assert_eq!(resolve_collisions(&mut state), 2);
        assert_eq!(state.drain_events(), vec![GameEvent::PlayerDestroyed { asteroid: 0 }]);
        assert!(state.asteroids.iter().all(|a| a.alive));
    }

    #[test]
    fn test_destroy_asteroid_on_hit() {
        let tuning = Tuning {
            destroy_asteroid_on_hit: true,
            ..Default::default()
        };
        let mut state = state_with(Vec2::new(100.0, 100.0), &[Vec2::new(105.0, 100.0)], tuning);
        resolve_collisions(&mut state);
        assert!(!state.asteroids[0].alive);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::PlayerDestroyed { asteroid: 0 },
                GameEvent::AsteroidDestroyed { asteroid: 0 }
            ]
        );
    }

    #[test]
    fn test_dead_player_frames_are_valid() {
        let mut state = state_with(Vec2::new(100.0, 100.0), &[Vec2::new(100.0, 100.0)], Tuning::default());
        state.player.kill();
        // Still overlapping, but nothing new happens
        assert_eq!(resolve_collisions(&mut state), 1);
        assert!(state.drain_events().is_empty());
    }
}

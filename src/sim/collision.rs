//! Player-vs-obstacle proximity detection
//!
//! Sphere-vs-sphere distance tests against the active set, guarded by a
//! per-session latch so a run reports at most one collision.

use glam::Vec3;

use super::obstacle::Obstacle;
use crate::consts::{COLLISION_THRESHOLD, PLAYER_BASE_RADIUS};

/// Effective player collision radius.
///
/// The threshold fraction keeps the hitbox smaller than the visual model,
/// forgiving near-misses.
#[inline]
pub fn player_radius(player_size: f32) -> f32 {
    PLAYER_BASE_RADIUS * player_size * COLLISION_THRESHOLD
}

/// Test the player against every active obstacle, in active-set order.
///
/// Returns true and trips the guard on the first overlap found; once the
/// guard is tripped the whole check is a no-op for the rest of the session.
/// The detector only reads obstacles, never mutates them.
pub fn check_collisions(
    player_pos: Vec3,
    player_size: f32,
    obstacles: &[Obstacle],
    guard: &mut bool,
) -> bool {
    if *guard {
        return false;
    }

    let radius = player_radius(player_size);
    for obstacle in obstacles {
        if !obstacle.active {
            continue;
        }
        let threshold = radius + obstacle.kind.config().collision_radius;
        if player_pos.distance(obstacle.pos) < threshold {
            *guard = true;
            return true;
        }
    }

    false
}

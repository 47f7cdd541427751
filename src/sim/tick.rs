//! Frame and score-timer entry points
//!
//! The host drives two clocks: the render loop calls `advance_frame` once
//! per frame, and a fixed 100 ms timer calls `score_tick`. Both are
//! serialized by the host event loop; only one mutates the score at a time.
//!
//! Within a frame the order is fixed: spawn, then advance motion (a newly
//! spawned obstacle gets its first update the same frame), then detect
//! collisions against post-move positions.

use glam::Vec3;

use super::collision::check_collisions;
use super::difficulty;
use super::motion::advance_all;
use super::state::GameState;

/// Per-frame inputs read from the player-controls collaborator
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub player_pos: Vec3,
    /// Size scalar; scales the effective collision radius
    pub player_size: f32,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            player_pos: Vec3::ZERO,
            player_size: 1.0,
        }
    }
}

/// Advance the simulation by one frame.
///
/// No-op outside Active. Returns true when the player collided this frame;
/// the session transitions to Ended and the caller propagates the event to
/// the game-state collaborator.
pub fn advance_frame(state: &mut GameState, input: &FrameInput, now_ms: f64, dt: f32) -> bool {
    if !state.is_playing() {
        return false;
    }

    state.elapsed_secs += dt;
    state.expire_notification(now_ms);

    if let Some(obstacle) = state.spawner.try_spawn(now_ms, state.score, true) {
        log::debug!("spawned {:?} #{} at {}", obstacle.kind, obstacle.id, obstacle.pos);
        state.obstacles.push(obstacle);
    }

    advance_all(&mut state.obstacles, state.elapsed_secs, dt);

    let hit = check_collisions(
        input.player_pos,
        input.player_size,
        &state.obstacles,
        &mut state.collided,
    );
    if hit {
        state.end();
    }
    hit
}

/// Score timer entry point, called every `SCORE_TICK_MS` while playing.
///
/// Accrues one base unit scaled by the current tier multiplier (rounded to
/// the nearest integer) and raises the tier-up banner on a crossing.
pub fn score_tick(state: &mut GameState, now_ms: f64) {
    if !state.is_playing() {
        return;
    }

    let previous = state.score;
    let multiplier = difficulty::compute_parameters(previous).score_multiplier;
    state.score += multiplier.round() as u64;

    if difficulty::is_new_tier(previous, state.score) {
        state.notify_tier(now_ms);
    }
    state.expire_notification(now_ms);
}

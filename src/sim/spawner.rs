//! Time-gated procedural obstacle spawning
//!
//! The spawner is the only RNG consumer in the core. It is seeded per
//! session, so a replay with the same seed and the same spawn timings
//! produces the identical obstacle stream.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::obstacle::{Obstacle, ObstacleKind};
use crate::consts::*;

/// Factory for the session's obstacle stream
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    rng: Pcg32,
    last_spawn_ms: f64,
    next_id: u32,
}

/// Continuous difficulty factor, independent of the tier table.
///
/// Shrinks the spawn interval and raises obstacle speed smoothly on top of
/// the tiered jumps; both escalation mechanisms are deliberate.
pub fn difficulty_factor(score: u64) -> f32 {
    1.0 + score as f32 / DIFFICULTY_SCORE_DIVISOR
}

impl ObstacleSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            last_spawn_ms: 0.0,
            next_id: 1,
        }
    }

    /// Arm the gate so the first spawn waits a full interval from `now_ms`.
    pub fn reset(&mut self, now_ms: f64) {
        self.last_spawn_ms = now_ms;
    }

    /// Shift the gate forward by time spent paused so the pause does not
    /// count toward the interval.
    pub fn rebase(&mut self, paused_ms: f64) {
        self.last_spawn_ms += paused_ms;
    }

    /// Spawn one obstacle if playing and the interval has elapsed.
    ///
    /// The interval is `BASE_SPAWN_INTERVAL_MS / difficulty_factor(score)`,
    /// so spawns accelerate continuously with score. The caller appends the
    /// returned obstacle to the active set, preserving spawn order.
    pub fn try_spawn(&mut self, now_ms: f64, score: u64, playing: bool) -> Option<Obstacle> {
        if !playing {
            return None;
        }

        let factor = difficulty_factor(score);
        let interval = BASE_SPAWN_INTERVAL_MS / factor as f64;
        if now_ms - self.last_spawn_ms < interval {
            return None;
        }
        self.last_spawn_ms = now_ms;

        let kind = ObstacleKind::ALL[self.rng.random_range(0..ObstacleKind::ALL.len())];
        let x = self.rng.random_range(-LANE_HALF_WIDTH..=LANE_HALF_WIDTH);
        let y = if kind.is_floor_bound() {
            kind.config().base_y
        } else {
            kind.config().base_y + self.rng.random_range(-SPAWN_Y_JITTER..=SPAWN_Y_JITTER)
        };
        let phase = self.rng.random_range(0.0..std::f32::consts::TAU);

        let id = self.next_id;
        self.next_id += 1;

        Some(Obstacle::new(
            id,
            kind,
            Vec3::new(x, y, -SPAWN_DISTANCE),
            BASE_OBSTACLE_SPEED * factor,
            phase,
        ))
    }

    /// Total obstacles spawned so far this session
    pub fn spawned_count(&self) -> u32 {
        self.next_id - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_spawn_while_not_playing() {
        let mut spawner = ObstacleSpawner::new(7);
        assert!(spawner.try_spawn(1_000_000.0, 0, false).is_none());
    }

    #[test]
    fn test_interval_gating() {
        let mut spawner = ObstacleSpawner::new(7);
        spawner.last_spawn_ms = 1000.0;

        // Score 0: interval is the full 2000 ms
        assert!(spawner.try_spawn(1500.0, 0, true).is_none());

        let spawned = spawner.try_spawn(3100.0, 0, true);
        assert!(spawned.is_some());
        assert_eq!(spawner.last_spawn_ms, 3100.0);
    }

    #[test]
    fn test_interval_shrinks_with_score() {
        let mut spawner = ObstacleSpawner::new(7);
        spawner.last_spawn_ms = 0.0;

        // At score 5000 the factor is 2.0, halving the interval
        assert!(spawner.try_spawn(1500.0, 0, true).is_none());
        assert!(spawner.try_spawn(1500.0, 5000, true).is_some());
    }

    #[test]
    fn test_spawn_geometry_and_speed() {
        let mut spawner = ObstacleSpawner::new(42);
        for i in 0..50u32 {
            let now = (i as f64 + 1.0) * 3000.0;
            let o = spawner.try_spawn(now, 0, true).expect("interval elapsed");
            assert_eq!(o.pos.z, -SPAWN_DISTANCE);
            assert!(o.pos.x >= -LANE_HALF_WIDTH && o.pos.x <= LANE_HALF_WIDTH);
            if o.kind.is_floor_bound() {
                assert_eq!(o.pos.y, o.kind.config().base_y);
            } else {
                let base = o.kind.config().base_y;
                assert!(o.pos.y >= base - SPAWN_Y_JITTER && o.pos.y <= base + SPAWN_Y_JITTER);
            }
            assert_eq!(o.speed, BASE_OBSTACLE_SPEED);
            assert!(o.phase_offset >= 0.0 && o.phase_offset < std::f32::consts::TAU);
        }
    }

    #[test]
    fn test_ids_monotonic() {
        let mut spawner = ObstacleSpawner::new(42);
        let mut last_id = 0;
        for i in 0..10u32 {
            let o = spawner
                .try_spawn((i as f64 + 1.0) * 3000.0, 0, true)
                .expect("interval elapsed");
            assert!(o.id > last_id);
            last_id = o.id;
        }
        assert_eq!(spawner.spawned_count(), 10);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = ObstacleSpawner::new(99);
        let mut b = ObstacleSpawner::new(99);
        for i in 0..20u32 {
            let now = (i as f64 + 1.0) * 3000.0;
            let oa = a.try_spawn(now, 0, true).unwrap();
            let ob = b.try_spawn(now, 0, true).unwrap();
            assert_eq!(oa.kind, ob.kind);
            assert_eq!(oa.pos, ob.pos);
            assert_eq!(oa.phase_offset, ob.phase_offset);
        }
    }
}

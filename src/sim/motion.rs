//! Per-frame obstacle motion and lifecycle culling
//!
//! Forward speed is expressed in units per 60 fps frame; multiplying by
//! `dt * 60` keeps travel rate frame-rate independent. Oscillation overlays
//! are driven by the session's active-time clock, so paused obstacles hold
//! position and resume without a catch-up jump.

use super::obstacle::{MovementPattern, Obstacle, ObstacleKind};
use crate::consts::CULL_Z;

/// How hard a shark banks into its sway, radians of yaw per unit of sine
const SHARK_YAW_GAIN: f32 = 0.4;
/// Jellyfish pulse depth (fraction of base scale)
const JELLY_PULSE_DEPTH: f32 = 0.2;
/// Jellyfish pulse rate in rad/s
const JELLY_PULSE_RATE: f32 = 4.0;

/// Advance one obstacle by `dt` seconds at `elapsed_secs` of active time.
///
/// Marks the obstacle inactive once it crosses the cull plane; that
/// transition is one-way and the owning set drops inactive entries.
pub fn advance(obstacle: &mut Obstacle, elapsed_secs: f32, dt: f32) {
    let cfg = obstacle.kind.config();
    let t = elapsed_secs + obstacle.phase_offset;

    obstacle.pos.z += obstacle.speed * dt * 60.0;

    match cfg.movement {
        MovementPattern::Static => {}
        MovementPattern::UpDown => {
            obstacle.pos.y += (t * cfg.frequency).sin() * cfg.amplitude * dt;
        }
        MovementPattern::LeftRight => {
            obstacle.pos.x += (t * cfg.frequency).sin() * cfg.amplitude * dt;
        }
        MovementPattern::Zigzag => {
            let sway = (t * cfg.frequency).sin();
            obstacle.pos.x += sway * cfg.amplitude * dt;
            if obstacle.kind == ObstacleKind::Shark {
                // Sharks weave: shallow vertical motion at double rate
                obstacle.pos.y += (t * cfg.frequency * 2.0).sin() * (cfg.amplitude / 3.0) * dt;
                obstacle.rotation = sway * SHARK_YAW_GAIN;
            }
        }
    }

    if obstacle.kind == ObstacleKind::Jellyfish {
        // Pulse: bell widens while the body shortens, and vice versa.
        // Visual only; the collision radius stays fixed.
        let pulse = (elapsed_secs * JELLY_PULSE_RATE + obstacle.phase_offset).sin();
        let squash = 1.0 + pulse * JELLY_PULSE_DEPTH;
        obstacle.scale.x = cfg.scale * squash;
        obstacle.scale.z = cfg.scale * squash;
        obstacle.scale.y = cfg.scale / squash;
    }

    if obstacle.pos.z > CULL_Z {
        obstacle.active = false;
    }
}

/// Advance every obstacle in the active set and drop the ones culled.
pub fn advance_all(obstacles: &mut Vec<Obstacle>, elapsed_secs: f32, dt: f32) {
    for obstacle in obstacles.iter_mut() {
        advance(obstacle, elapsed_secs, dt);
    }
    obstacles.retain(|o| o.active);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use glam::Vec3;

    fn obstacle(kind: ObstacleKind, z: f32, speed: f32) -> Obstacle {
        Obstacle::new(1, kind, Vec3::new(0.0, kind.config().base_y, z), speed, 0.0)
    }

    #[test]
    fn test_forward_progress_normalizes_to_frame_rate() {
        // One 60 fps frame moves z by exactly `speed`
        let mut o = obstacle(ObstacleKind::Rock, -100.0, 0.5);
        advance(&mut o, 0.0, SIM_DT);
        assert!((o.pos.z - (-99.5)).abs() < 1e-4);

        // Two 120 fps frames cover the same distance
        let mut half = obstacle(ObstacleKind::Rock, -100.0, 0.5);
        advance(&mut half, 0.0, SIM_DT / 2.0);
        advance(&mut half, SIM_DT / 2.0, SIM_DT / 2.0);
        assert!((half.pos.z - o.pos.z).abs() < 1e-4);
    }

    #[test]
    fn test_static_kind_never_strays() {
        let mut o = obstacle(ObstacleKind::Coral, -100.0, 0.3);
        let (x0, y0) = (o.pos.x, o.pos.y);
        for i in 0..600 {
            advance(&mut o, i as f32 * SIM_DT, SIM_DT);
        }
        assert_eq!(o.pos.x, x0);
        assert_eq!(o.pos.y, y0);
    }

    #[test]
    fn test_shark_zigzag_zero_phase_at_t0() {
        // sin(0) = 0, so the first frame moves only z, by exactly `speed`
        let mut o = obstacle(ObstacleKind::Shark, -100.0, 0.3);
        let (x0, y0) = (o.pos.x, o.pos.y);
        advance(&mut o, 0.0, SIM_DT);
        assert_eq!(o.pos.x, x0);
        assert_eq!(o.pos.y, y0);
        assert!((o.pos.z - (-100.0 + 0.3)).abs() < 1e-4);
    }

    #[test]
    fn test_shark_banks_into_sway() {
        let mut o = obstacle(ObstacleKind::Shark, -100.0, 0.3);
        // Quarter period of the 0.5 rad/s sway puts sin near +1
        let t = std::f32::consts::FRAC_PI_2 / 0.5;
        advance(&mut o, t, SIM_DT);
        assert!(o.rotation > 0.35);
    }

    #[test]
    fn test_jellyfish_pulse_preserves_radius_config() {
        let mut o = obstacle(ObstacleKind::Jellyfish, -100.0, 0.3);
        advance(&mut o, 0.4, SIM_DT);
        // Bell and body move oppositely around the base scale
        let base = ObstacleKind::Jellyfish.config().scale;
        assert!(o.scale.x != base);
        assert_eq!(o.scale.x, o.scale.z);
        assert!((o.scale.x * o.scale.y - base * base).abs() < 1e-4);
    }

    #[test]
    fn test_cull_is_one_way() {
        let mut o = obstacle(ObstacleKind::Rock, CULL_Z - 0.1, 0.3);
        advance(&mut o, 0.0, SIM_DT);
        assert!(!o.active);
        // Further advances never reactivate
        advance(&mut o, SIM_DT, SIM_DT);
        assert!(!o.active);
    }

    #[test]
    fn test_advance_all_drops_culled() {
        let mut set = vec![
            obstacle(ObstacleKind::Rock, -50.0, 0.3),
            obstacle(ObstacleKind::Rock, CULL_Z - 0.01, 0.3),
        ];
        set[1].id = 2;
        advance_all(&mut set, 0.0, SIM_DT);
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].id, 1);
    }
}

//! Obstacle entities and their per-kind static configuration

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Lateral/vertical oscillation rule layered on top of forward travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementPattern {
    /// No overlay; drifts straight toward the player
    Static,
    /// Vertical sine bobbing
    UpDown,
    /// Horizontal sine sway
    LeftRight,
    /// Horizontal sway plus, for sharks, a faster shallow vertical weave
    Zigzag,
}

/// The five obstacle kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Coral,
    Seaweed,
    Rock,
    Shark,
    Jellyfish,
}

/// Immutable per-kind configuration
#[derive(Debug, Clone, Copy)]
pub struct KindConfig {
    /// Base visual scale
    pub scale: f32,
    pub movement: MovementPattern,
    /// Resting y at spawn (seafloor kinds sit below the swim lane)
    pub base_y: f32,
    /// Collision sphere radius, fixed for the obstacle's lifetime
    pub collision_radius: f32,
    /// Oscillation amplitude (unused for Static)
    pub amplitude: f32,
    /// Oscillation frequency in rad/s (unused for Static)
    pub frequency: f32,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 5] = [
        ObstacleKind::Coral,
        ObstacleKind::Seaweed,
        ObstacleKind::Rock,
        ObstacleKind::Shark,
        ObstacleKind::Jellyfish,
    ];

    /// Static configuration for this kind
    pub fn config(self) -> &'static KindConfig {
        const CORAL: KindConfig = KindConfig {
            scale: 1.0,
            movement: MovementPattern::Static,
            base_y: -1.5,
            collision_radius: 1.0,
            amplitude: 0.0,
            frequency: 0.0,
        };
        const SEAWEED: KindConfig = KindConfig {
            scale: 1.3,
            movement: MovementPattern::LeftRight,
            base_y: -1.5,
            collision_radius: 0.8,
            amplitude: 0.5,
            frequency: 1.2,
        };
        const ROCK: KindConfig = KindConfig {
            scale: 1.1,
            movement: MovementPattern::Static,
            base_y: -1.0,
            collision_radius: 1.1,
            amplitude: 0.0,
            frequency: 0.0,
        };
        const SHARK: KindConfig = KindConfig {
            scale: 1.5,
            movement: MovementPattern::Zigzag,
            base_y: 0.5,
            collision_radius: 1.2,
            amplitude: 1.5,
            frequency: 0.5,
        };
        const JELLYFISH: KindConfig = KindConfig {
            scale: 0.8,
            movement: MovementPattern::UpDown,
            base_y: 1.0,
            collision_radius: 0.7,
            amplitude: 1.0,
            frequency: 2.0,
        };

        match self {
            ObstacleKind::Coral => &CORAL,
            ObstacleKind::Seaweed => &SEAWEED,
            ObstacleKind::Rock => &ROCK,
            ObstacleKind::Shark => &SHARK,
            ObstacleKind::Jellyfish => &JELLYFISH,
        }
    }

    /// Seafloor kinds spawn at their base y with no vertical jitter
    pub fn is_floor_bound(self) -> bool {
        matches!(self, ObstacleKind::Coral | ObstacleKind::Seaweed)
    }
}

/// A live obstacle, owned by the session's active set from spawn until culled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Unique, monotonically increasing per session
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec3,
    /// Per-axis scale; only jellyfish pulse away from uniform
    pub scale: Vec3,
    /// Yaw in radians (sharks steer into their sway)
    pub rotation: f32,
    /// Forward travel in units per 60 fps frame
    pub speed: f32,
    /// Random phase in [0, 2π) so same-kind obstacles desynchronize
    pub phase_offset: f32,
    /// Cleared once the obstacle passes the cull plane; never set again
    pub active: bool,
}

impl Obstacle {
    pub fn new(id: u32, kind: ObstacleKind, pos: Vec3, speed: f32, phase_offset: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            scale: Vec3::splat(kind.config().scale),
            rotation: 0.0,
            speed,
            phase_offset,
            active: true,
        }
    }
}

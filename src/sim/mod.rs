//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-driven clocks only (frame loop + 100 ms score timer)
//! - Seeded RNG only (the spawner owns the session's Pcg32)
//! - Stable iteration order (active set kept in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod motion;
pub mod obstacle;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{check_collisions, player_radius};
pub use difficulty::{
    DifficultyTier, GameParameters, TIER_NAMES, TIERS, compute_parameters, is_new_tier,
    next_milestone, tier_index_for, tier_name,
};
pub use motion::{advance, advance_all};
pub use obstacle::{KindConfig, MovementPattern, Obstacle, ObstacleKind};
pub use spawner::{ObstacleSpawner, difficulty_factor};
pub use state::{GamePhase, GameState, TierNotification};
pub use tick::{FrameInput, advance_frame, score_tick};

//! Session state and transitions
//!
//! One `GameState` per page load; sessions cycle Idle → Active → Ended and
//! back. Score ticks, spawning, motion, and collision checks only happen in
//! Active.

use serde::Serialize;

use super::difficulty::{self, GameParameters};
use super::obstacle::Obstacle;
use super::spawner::ObstacleSpawner;
use crate::consts::TIER_NOTIFY_MS;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// No run yet (menu)
    Idle,
    /// Active gameplay
    Active,
    /// Run suspended; all simulated time is frozen
    Paused,
    /// Run over (collision or explicit stop); score is frozen
    Ended,
}

/// Transient "new difficulty tier" banner for the HUD
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TierNotification {
    pub tier_index: usize,
    pub name: &'static str,
    /// Auto-dismissal deadline (host clock, ms)
    pub expires_at_ms: f64,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducible spawn streams
    pub seed: u64,
    pub phase: GamePhase,
    /// Monotonically non-decreasing during a run; frozen at Ended
    pub score: u64,
    /// Active obstacle set, in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: ObstacleSpawner,
    /// Collision latch; at most one collision event per run
    pub collided: bool,
    /// Active-time clock driving oscillation phases; does not advance while
    /// paused, so positions freeze and resume without a jump
    pub elapsed_secs: f32,
    pub notification: Option<TierNotification>,
    paused_at_ms: Option<f64>,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            obstacles: Vec::new(),
            spawner: ObstacleSpawner::new(seed),
            collided: false,
            elapsed_secs: 0.0,
            notification: None,
            paused_at_ms: None,
        }
    }

    /// Begin a run from Idle or Ended. Resets score, the active set, the
    /// collision latch, and arms the spawn gate at `now_ms`.
    pub fn start(&mut self, now_ms: f64) {
        if self.phase == GamePhase::Active || self.phase == GamePhase::Paused {
            return;
        }
        self.score = 0;
        self.obstacles.clear();
        self.spawner = ObstacleSpawner::new(self.seed);
        self.spawner.reset(now_ms);
        self.collided = false;
        self.elapsed_secs = 0.0;
        self.notification = None;
        self.paused_at_ms = None;
        self.phase = GamePhase::Active;
        log::info!("run started (seed {})", self.seed);
    }

    pub fn pause(&mut self, now_ms: f64) {
        if self.phase == GamePhase::Active {
            self.phase = GamePhase::Paused;
            self.paused_at_ms = Some(now_ms);
        }
    }

    /// Resume from Paused. The spawn gate and any pending banner deadline
    /// are rebased so time spent paused does not count against them.
    pub fn resume(&mut self, now_ms: f64) {
        if self.phase == GamePhase::Paused {
            if let Some(paused_at) = self.paused_at_ms.take() {
                let paused_ms = now_ms - paused_at;
                self.spawner.rebase(paused_ms);
                if let Some(n) = &mut self.notification {
                    n.expires_at_ms += paused_ms;
                }
            }
            self.phase = GamePhase::Active;
        }
    }

    /// End the run (collision or explicit stop); the score freezes.
    pub fn end(&mut self) {
        if self.phase == GamePhase::Active || self.phase == GamePhase::Paused {
            self.phase = GamePhase::Ended;
            log::info!(
                "run ended: score {}, tier {}",
                self.score,
                difficulty::tier_name(difficulty::tier_index_for(self.score))
            );
        }
    }

    /// Derived HUD parameters for the current score
    pub fn parameters(&self) -> GameParameters {
        difficulty::compute_parameters(self.score)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Raise the tier-up banner for the tier the score currently sits in.
    pub(crate) fn notify_tier(&mut self, now_ms: f64) {
        let tier_index = difficulty::tier_index_for(self.score);
        self.notification = Some(TierNotification {
            tier_index,
            name: difficulty::tier_name(tier_index),
            expires_at_ms: now_ms + TIER_NOTIFY_MS,
        });
        log::info!("difficulty up: {}", difficulty::tier_name(tier_index));
    }

    /// Drop the banner once its deadline passes.
    pub(crate) fn expire_notification(&mut self, now_ms: f64) {
        if let Some(n) = &self.notification {
            if now_ms >= n.expires_at_ms {
                self.notification = None;
            }
        }
    }

    /// Explicit banner dismissal from the UI.
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}

//! Nemo Run - an underwater endless-runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (difficulty curve, spawning, motion, collisions)
//! - `highscores`: Local leaderboard persisted to LocalStorage on web
//!
//! Rendering, audio, and UI live in the host shell. The crate exposes the
//! active obstacle set, HUD parameters, and session events; the shell drives
//! the frame loop and the 100 ms score timer.

pub mod highscores;
pub mod sim;

pub use highscores::HighScores;
pub use sim::{GameParameters, GamePhase, GameState, Obstacle, ObstacleKind};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Obstacles spawn this far ahead of the player (negative z)
    pub const SPAWN_DISTANCE: f32 = 100.0;
    /// Obstacles past this z are behind the player and get culled
    pub const CULL_Z: f32 = 20.0;
    /// Half-width of the playable lane; spawn x is uniform in ±this
    pub const LANE_HALF_WIDTH: f32 = 5.0;
    /// Vertical spawn jitter for free-swimming kinds
    pub const SPAWN_Y_JITTER: f32 = 1.5;

    /// Base interval between spawns at score 0
    pub const BASE_SPAWN_INTERVAL_MS: f64 = 2000.0;
    /// Continuous difficulty factor is 1 + score / this
    pub const DIFFICULTY_SCORE_DIVISOR: f32 = 5000.0;
    /// Obstacle forward speed at factor 1.0, in units per 60 fps frame
    pub const BASE_OBSTACLE_SPEED: f32 = 0.3;

    /// Player collision sphere at size 1.0, before the threshold fraction
    pub const PLAYER_BASE_RADIUS: f32 = 0.5;
    /// Forgiving-hitbox fraction applied to the player radius
    pub const COLLISION_THRESHOLD: f32 = 0.8;

    /// Score timer cadence (host-driven)
    pub const SCORE_TICK_MS: f64 = 100.0;
    /// Tier-up notification lifetime before auto-dismissal
    pub const TIER_NOTIFY_MS: f64 = 3000.0;
}

#[cfg(target_arch = "wasm32")]
mod wasm_api {
    use glam::Vec3;
    use wasm_bindgen::prelude::*;

    use crate::highscores::HighScores;
    use crate::sim::{FrameInput, GameState, advance_frame, score_tick};

    #[wasm_bindgen(start)]
    fn init() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }

    /// Game handle driven by the JS shell.
    ///
    /// The shell calls `frame` once per rendered frame and `tick_score` from a
    /// 100 ms timer, then pulls JSON views for the renderer and HUD.
    #[wasm_bindgen]
    pub struct NemoRun {
        state: GameState,
        highscores: HighScores,
    }

    #[wasm_bindgen]
    impl NemoRun {
        #[wasm_bindgen(constructor)]
        pub fn new(seed: u32) -> Self {
            Self {
                state: GameState::new(seed as u64),
                highscores: HighScores::load(),
            }
        }

        pub fn start_run(&mut self, now_ms: f64) {
            self.state.start(now_ms);
        }

        pub fn pause(&mut self, now_ms: f64) {
            self.state.pause(now_ms);
        }

        pub fn resume(&mut self, now_ms: f64) {
            self.state.resume(now_ms);
        }

        /// End the run and record the score. Returns the leaderboard rank
        /// achieved (1-indexed), or 0 if the score did not qualify.
        pub fn end_run(&mut self) -> u32 {
            self.state.end();
            let rank = self.highscores.record(
                self.state.score,
                self.state.parameters().tier_index as u32,
                js_sys::Date::now(),
            );
            self.highscores.save();
            rank.unwrap_or(0) as u32
        }

        /// Advance one frame. Returns true when the player collided this
        /// frame (the run is then over; call `end_run` to record it).
        pub fn frame(
            &mut self,
            player_x: f32,
            player_y: f32,
            player_z: f32,
            player_size: f32,
            now_ms: f64,
            dt: f32,
        ) -> bool {
            let input = FrameInput {
                player_pos: Vec3::new(player_x, player_y, player_z),
                player_size,
            };
            advance_frame(&mut self.state, &input, now_ms, dt)
        }

        /// Score timer entry point; call every `SCORE_TICK_MS`.
        pub fn tick_score(&mut self, now_ms: f64) -> f64 {
            score_tick(&mut self.state, now_ms);
            self.state.score as f64
        }

        pub fn score(&self) -> f64 {
            self.state.score as f64
        }

        pub fn phase(&self) -> String {
            format!("{:?}", self.state.phase)
        }

        /// Current HUD parameters as JSON.
        pub fn parameters_json(&self) -> String {
            serde_json::to_string(&self.state.parameters()).unwrap_or_else(|_| "null".into())
        }

        /// Active obstacles (id, kind, position, scale, rotation) as JSON,
        /// for draw-time use by the shell's renderer.
        pub fn obstacles_json(&self) -> String {
            serde_json::to_string(&self.state.obstacles).unwrap_or_else(|_| "[]".into())
        }

        /// Pending tier-up notification as JSON, or "null".
        pub fn notification_json(&self) -> String {
            serde_json::to_string(&self.state.notification).unwrap_or_else(|_| "null".into())
        }

        pub fn dismiss_notification(&mut self) {
            self.state.dismiss_notification();
        }

        pub fn highscores_json(&self) -> String {
            serde_json::to_string(&self.highscores).unwrap_or_else(|_| "[]".into())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_api::NemoRun;

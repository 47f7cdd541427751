//! Nemo Run headless demo driver
//!
//! Runs a seeded session at a fixed 60 Hz with a scripted weaving player,
//! logging tier-ups and the final result. Useful for eyeballing the
//! difficulty ramp and spawn density without a browser shell.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec3;
    use nemo_run::consts::*;
    use nemo_run::highscores::HighScores;
    use nemo_run::sim::{FrameInput, GamePhase, GameState, advance_frame, score_tick};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xF15B);
    let max_ms: f64 = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(120_000.0);

    let mut state = GameState::new(seed);
    state.start(0.0);

    let frame_ms = SIM_DT as f64 * 1000.0;
    let mut now_ms = 0.0;
    let mut next_score_tick = SCORE_TICK_MS;

    while state.phase == GamePhase::Active && now_ms < max_ms {
        now_ms += frame_ms;

        if now_ms >= next_score_tick {
            score_tick(&mut state, now_ms);
            next_score_tick += SCORE_TICK_MS;
        }

        // Scripted player: weaves across the lane, bobbing gently
        let t = (now_ms / 1000.0) as f32;
        let input = FrameInput {
            player_pos: Vec3::new(
                (t * 0.8).sin() * (LANE_HALF_WIDTH - 1.0),
                (t * 0.5).sin() * 0.8,
                0.0,
            ),
            player_size: 1.0,
        };

        if advance_frame(&mut state, &input, now_ms, SIM_DT) {
            log::info!("collision at t={:.1}s", now_ms / 1000.0);
        }
    }

    state.end();

    let params = state.parameters();
    log::info!(
        "final: score {} | tier {} | {} obstacles spawned | {} still active",
        state.score,
        params.tier_index,
        state.spawner.spawned_count(),
        state.obstacles.len(),
    );

    let mut highscores = HighScores::load();
    if highscores.best().is_none_or(|e| state.score > e.score) {
        log::info!("new personal best");
    }
    if let Some(rank) = highscores.record(state.score, params.tier_index as u32, now_ms) {
        log::info!("leaderboard rank {}", rank);
        highscores.save();
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm build is driven through the NemoRun bindgen API in lib.rs.
}

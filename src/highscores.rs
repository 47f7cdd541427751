//! Session-end score ledger
//!
//! A top-10 local leaderboard. The shell records a finished run and gets
//! back the rank it earned; the board is stored as a JSON array in
//! LocalStorage on web (native builds keep it in memory only).

use serde::{Deserialize, Serialize};

/// Board capacity; scores below the tenth entry are not kept
pub const LEADERBOARD_SIZE: usize = 10;

/// One finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Difficulty tier the run ended in
    pub tier: u32,
    /// Host clock (Unix ms) at session end
    pub achieved_at_ms: f64,
}

/// The leaderboard, ordered best-first. Serializes as a bare entry array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "nemo_run_highscores";

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run.
    ///
    /// Returns the 1-indexed rank the score earned, or `None` when it did
    /// not make the board (zero scores never do). Ties rank below the
    /// earlier run with the same score.
    pub fn record(&mut self, score: u64, tier: u32, achieved_at_ms: f64) -> Option<usize> {
        if score == 0 {
            return None;
        }

        let slot = self.entries.partition_point(|e| e.score >= score);
        if slot >= LEADERBOARD_SIZE {
            return None;
        }

        self.entries.insert(
            slot,
            HighScoreEntry {
                score,
                tier,
                achieved_at_ms,
            },
        );
        self.entries.truncate(LEADERBOARD_SIZE);
        Some(slot + 1)
    }

    /// Best run on record, if any
    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    /// Load the board from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                    log::info!("loaded {} high scores", scores.entries.len());
                    return scores;
                }
                log::warn!("high score store unreadable, starting fresh");
            }
        }

        Self::new()
    }

    /// Save the board to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

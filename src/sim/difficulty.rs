//! Score-driven difficulty progression
//!
//! A fixed table of tiers keyed by score thresholds, with linear
//! interpolation between neighboring tiers so speed and spawn rate ramp
//! continuously instead of stepping. Pure functions, no state.

use serde::Serialize;

/// One row of the difficulty table
#[derive(Debug, Clone, Copy)]
pub struct DifficultyTier {
    /// Score at which this tier begins
    pub score_threshold: u64,
    /// Nominal game speed for the HUD speed gauge
    pub speed: f32,
    /// Nominal seconds between spawns for the HUD
    pub spawn_rate: f32,
    /// Points-per-tick multiplier
    pub score_multiplier: f32,
}

/// The difficulty table. Thresholds strictly increasing, first is 0.
pub const TIERS: [DifficultyTier; 6] = [
    DifficultyTier { score_threshold: 0, speed: 5.0, spawn_rate: 2.0, score_multiplier: 1.0 },
    DifficultyTier { score_threshold: 100, speed: 6.0, spawn_rate: 1.8, score_multiplier: 1.0 },
    DifficultyTier { score_threshold: 250, speed: 7.0, spawn_rate: 1.6, score_multiplier: 1.2 },
    DifficultyTier { score_threshold: 500, speed: 8.0, spawn_rate: 1.4, score_multiplier: 1.5 },
    DifficultyTier { score_threshold: 1000, speed: 9.0, spawn_rate: 1.2, score_multiplier: 2.0 },
    DifficultyTier { score_threshold: 2000, speed: 10.0, spawn_rate: 1.0, score_multiplier: 3.0 },
];

/// Display names, one per tier (clamped for out-of-range indices)
pub const TIER_NAMES: [&str; 6] = [
    "Shallow Waters",
    "Coral Gardens",
    "Open Sea",
    "Twilight Zone",
    "Deep Current",
    "The Abyss",
];

/// Parameters derived from the current score, recomputed on demand
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameParameters {
    pub speed: f32,
    pub spawn_rate: f32,
    pub score_multiplier: f32,
    pub tier_index: usize,
    /// Threshold of the next tier, `None` at the last tier
    pub next_milestone: Option<u64>,
}

/// Greatest tier index whose threshold is at or below `score`.
///
/// Scans high-to-low so ties favor the higher tier.
pub fn tier_index_for(score: u64) -> usize {
    for (i, tier) in TIERS.iter().enumerate().rev() {
        if score >= tier.score_threshold {
            return i;
        }
    }
    0
}

/// Threshold of the tier after the current one, or `None` at the last tier.
pub fn next_milestone(score: u64) -> Option<u64> {
    TIERS
        .get(tier_index_for(score) + 1)
        .map(|t| t.score_threshold)
}

/// Compute the interpolated parameters for a score.
///
/// Exactly at a tier threshold, or past the last threshold, the tier's raw
/// values come back unmodified. Between thresholds, speed/spawn rate/
/// multiplier interpolate linearly toward the next tier.
///
/// Precondition: `score` is the session's accumulated score, so it is always
/// finite and non-negative.
pub fn compute_parameters(score: u64) -> GameParameters {
    let tier_index = tier_index_for(score);
    let tier = &TIERS[tier_index];

    match TIERS.get(tier_index + 1) {
        Some(next) if score > tier.score_threshold => {
            let span = (next.score_threshold - tier.score_threshold) as f32;
            let progress = (score - tier.score_threshold) as f32 / span;
            GameParameters {
                speed: lerp(tier.speed, next.speed, progress),
                spawn_rate: lerp(tier.spawn_rate, next.spawn_rate, progress),
                score_multiplier: lerp(tier.score_multiplier, next.score_multiplier, progress),
                tier_index,
                next_milestone: Some(next.score_threshold),
            }
        }
        next => GameParameters {
            speed: tier.speed,
            spawn_rate: tier.spawn_rate,
            score_multiplier: tier.score_multiplier,
            tier_index,
            next_milestone: next.map(|t| t.score_threshold),
        },
    }
}

/// True iff the score moved into a higher tier.
///
/// Fires once per crossing no matter the step size; a jump over several
/// thresholds reports a single event for the final tier reached.
pub fn is_new_tier(previous_score: u64, current_score: u64) -> bool {
    tier_index_for(current_score) > tier_index_for(previous_score)
}

/// Display name for a tier index, clamped to the last name.
pub fn tier_name(tier_index: usize) -> &'static str {
    TIER_NAMES[tier_index.min(TIER_NAMES.len() - 1)]
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_index_boundaries() {
        assert_eq!(tier_index_for(0), 0);
        assert_eq!(tier_index_for(99), 0);
        assert_eq!(tier_index_for(100), 1);
        assert_eq!(tier_index_for(250), 2);
        assert_eq!(tier_index_for(1999), 4);
        assert_eq!(tier_index_for(2000), 5);
        assert_eq!(tier_index_for(1_000_000), 5);
    }

    #[test]
    fn test_raw_values_at_thresholds() {
        for (i, tier) in TIERS.iter().enumerate() {
            let params = compute_parameters(tier.score_threshold);
            assert_eq!(params.tier_index, i);
            assert_eq!(params.speed, tier.speed);
            assert_eq!(params.spawn_rate, tier.spawn_rate);
            assert_eq!(params.score_multiplier, tier.score_multiplier);
        }
    }

    #[test]
    fn test_past_last_tier() {
        let last = TIERS.last().unwrap();
        for score in [2000, 2500, 100_000] {
            let params = compute_parameters(score);
            assert_eq!(params.next_milestone, None);
            assert_eq!(params.speed, last.speed);
            assert_eq!(params.spawn_rate, last.spawn_rate);
            assert_eq!(params.score_multiplier, last.score_multiplier);
        }
    }

    #[test]
    fn test_interpolation_midpoint() {
        // Halfway between tier 0 (0, 5.0, 2.0, 1.0) and tier 1 (100, 6.0, 1.8, 1.0)
        let params = compute_parameters(50);
        assert_eq!(params.tier_index, 0);
        assert_eq!(params.next_milestone, Some(100));
        assert!((params.speed - 5.5).abs() < 1e-5);
        assert!((params.spawn_rate - 1.9).abs() < 1e-5);
        assert!((params.score_multiplier - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_next_milestone() {
        assert_eq!(next_milestone(0), Some(100));
        assert_eq!(next_milestone(150), Some(250));
        assert_eq!(next_milestone(2000), None);
    }

    #[test]
    fn test_new_tier_detection() {
        assert!(!is_new_tier(0, 50));
        assert!(!is_new_tier(100, 249));
        assert!(is_new_tier(99, 100));
        // Jumping several thresholds still reads as one crossing
        assert!(is_new_tier(90, 300));
        assert!(!is_new_tier(300, 300));
        assert!(!is_new_tier(2000, 50_000));
    }

    #[test]
    fn test_tier_names_clamp() {
        assert_eq!(tier_name(0), "Shallow Waters");
        assert_eq!(tier_name(5), "The Abyss");
        assert_eq!(tier_name(99), "The Abyss");
    }

    proptest! {
        // Within one tier pair, each parameter moves monotonically in the
        // direction of the tier delta as the score rises.
        #[test]
        fn interpolation_monotone(a in 0u64..100, b in 0u64..100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = compute_parameters(lo);
            let p_hi = compute_parameters(hi);
            prop_assert!(p_hi.speed >= p_lo.speed - 1e-5);
            prop_assert!(p_hi.spawn_rate <= p_lo.spawn_rate + 1e-5);
        }

        #[test]
        fn speed_never_leaves_table_range(score in 0u64..10_000) {
            let p = compute_parameters(score);
            prop_assert!(p.speed >= TIERS[0].speed && p.speed <= TIERS[5].speed);
            prop_assert!(p.spawn_rate <= TIERS[0].spawn_rate && p.spawn_rate >= TIERS[5].spawn_rate);
        }
    }
}

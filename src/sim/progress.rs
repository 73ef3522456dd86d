//! Level, speed and spawn-rate derivation
//!
//! Level is a pure function of score; everything else derives from level.

use crate::consts::*;

/// `level = score/10 + 1`, so every 10 points is a new course
pub fn level_for_score(score: u32) -> u32 {
    score / 10 + 1
}

/// Per-tick entity advance for a level, floored so high levels stay playable
pub fn step_for_level(level: u32) -> f32 {
    (2.0 - level as f32 * 0.1).max(0.5)
}

/// Spawn chance per tick, climbing with level up to the cap
pub fn spawn_probability(level: u32) -> f64 {
    (0.25 + level as f64 * 0.05).min(SPAWN_CAP)
}

/// Shrink the tick period by one level-up decrement, clamped at the floor
pub fn shrink_tick_period(current_ms: f64) -> f64 {
    (current_ms - TICK_DECREMENT_MS).max(MIN_TICK_MS)
}

/// Course name shown next to the level number
pub fn level_label(level: u32) -> String {
    let name = match level {
        1 => "Aperitif",
        2 => "Starter",
        3 => "Main",
        4 => "Dessert",
        _ => "Midnight Snack",
    };
    format!("Course {} · {}", level, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_formula() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(3), 1);
        assert_eq!(level_for_score(9), 1);
        assert_eq!(level_for_score(10), 2);
        assert_eq!(level_for_score(12), 2);
        assert_eq!(level_for_score(100), 11);
    }

    #[test]
    fn test_step_floor() {
        assert!((step_for_level(1) - 1.9).abs() < 1e-6);
        assert_eq!(step_for_level(15), 0.5);
        assert_eq!(step_for_level(1000), 0.5);
    }

    #[test]
    fn test_shrink_clamps_at_floor() {
        assert_eq!(shrink_tick_period(BASE_TICK_MS), 450.0);
        assert_eq!(shrink_tick_period(MIN_TICK_MS + 10.0), MIN_TICK_MS);
        assert_eq!(shrink_tick_period(MIN_TICK_MS), MIN_TICK_MS);
    }

    proptest! {
        #[test]
        fn prop_level_monotone_in_score(a in 0u32..100_000, b in 0u32..100_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(level_for_score(lo) <= level_for_score(hi));
        }

        #[test]
        fn prop_spawn_probability_bounded(level in 1u32..10_000) {
            let p = spawn_probability(level);
            prop_assert!((0.0..=SPAWN_CAP).contains(&p));
        }

        #[test]
        fn prop_tick_period_never_below_floor(level_ups in 0u32..1_000) {
            let mut period = BASE_TICK_MS;
            for _ in 0..level_ups {
                period = shrink_tick_period(period);
            }
            prop_assert!(period >= MIN_TICK_MS);
        }
    }
}

//! Scoring module - cascade points and level progression
//!
//! Points per resolve pass are `removed * BASE_GEM_POINTS * depth`, where
//! depth is the 1-based index of the pass within one continuous cascade.
//! Matches produced indirectly by falling gems are worth proportionally
//! more, rewarding chain reactions.
//!
//! Levels start at 1. A per-level accumulator tracks progress toward a
//! threshold that grows by x3/2 on every level-up. The level number is
//! reported outward only; it does not alter matching mechanics.

use crate::types::{
    BASE_GEM_POINTS, FIRST_LEVEL_THRESHOLD, LEVEL_GROWTH_DENOMINATOR, LEVEL_GROWTH_NUMERATOR,
};

/// Points for one resolve pass
pub fn cascade_points(removed: u32, depth: u32) -> u32 {
    removed
        .saturating_mul(BASE_GEM_POINTS)
        .saturating_mul(depth)
}

/// Grow a level threshold by the fixed multiplicative factor. Saturates at
/// `u32::MAX` so the threshold never decreases, even once the multiply
/// would overflow.
pub fn next_threshold(threshold: u32) -> u32 {
    threshold
        .checked_mul(LEVEL_GROWTH_NUMERATOR)
        .map_or(u32::MAX, |grown| grown / LEVEL_GROWTH_DENOMINATOR)
}

/// Level progression state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTracker {
    level: u32,
    /// Points accumulated within the current level
    level_score: u32,
    /// Points required to finish the current level
    threshold: u32,
}

impl LevelTracker {
    pub fn new() -> Self {
        Self {
            level: 1,
            level_score: 0,
            threshold: FIRST_LEVEL_THRESHOLD,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn level_score(&self) -> u32 {
        self.level_score
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Credit points toward the current level and apply any level-ups,
    /// carrying overflow into the next level. Returns levels gained.
    pub fn apply(&mut self, points: u32) -> u32 {
        self.level_score = self.level_score.saturating_add(points);

        let mut gained = 0;
        while self.level_score >= self.threshold {
            self.level_score -= self.threshold;
            self.level += 1;
            self.threshold = next_threshold(self.threshold);
            gained += 1;
        }
        gained
    }
}

impl Default for LevelTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_points_scale_with_depth() {
        assert_eq!(cascade_points(3, 1), 3 * BASE_GEM_POINTS);
        assert_eq!(cascade_points(3, 2), 6 * BASE_GEM_POINTS);
        assert_eq!(cascade_points(5, 4), 20 * BASE_GEM_POINTS);
        assert_eq!(cascade_points(0, 3), 0);
    }

    #[test]
    fn test_threshold_growth() {
        assert_eq!(next_threshold(500), 750);
        assert_eq!(next_threshold(750), 1125);
        // Saturates instead of overflowing
        assert_eq!(next_threshold(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_threshold_never_shrinks() {
        // Monotone even where the x3 intermediate overflows u32
        for &t in &[500u32, u32::MAX / 3, u32::MAX / 3 + 1, 3_000_000_000, u32::MAX] {
            assert!(next_threshold(t) >= t, "threshold shrank at {}", t);
        }
    }

    #[test]
    fn test_level_tracker_starts_at_one() {
        let tracker = LevelTracker::new();
        assert_eq!(tracker.level(), 1);
        assert_eq!(tracker.level_score(), 0);
        assert_eq!(tracker.threshold(), FIRST_LEVEL_THRESHOLD);
    }

    #[test]
    fn test_level_up_with_carryover() {
        let mut tracker = LevelTracker::new();

        assert_eq!(tracker.apply(FIRST_LEVEL_THRESHOLD - 1), 0);
        assert_eq!(tracker.level(), 1);

        // One more point crosses the threshold; nothing carries over
        assert_eq!(tracker.apply(1), 1);
        assert_eq!(tracker.level(), 2);
        assert_eq!(tracker.level_score(), 0);
        assert_eq!(tracker.threshold(), next_threshold(FIRST_LEVEL_THRESHOLD));

        // Overshoot carries into the new level
        let overshoot = tracker.threshold() + 100;
        assert_eq!(tracker.apply(overshoot), 1);
        assert_eq!(tracker.level(), 3);
        assert_eq!(tracker.level_score(), 100);
    }

    #[test]
    fn test_multiple_levels_in_one_apply() {
        let mut tracker = LevelTracker::new();
        let two_levels = FIRST_LEVEL_THRESHOLD + next_threshold(FIRST_LEVEL_THRESHOLD);

        assert_eq!(tracker.apply(two_levels + 5), 2);
        assert_eq!(tracker.level(), 3);
        assert_eq!(tracker.level_score(), 5);
    }
}

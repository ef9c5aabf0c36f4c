//! Rule-based wellness scoring
//!
//! Starts from a baseline of 50 and applies a fixed sequence of integer
//! adjustments, collecting insight sentences along the way. The rules are
//! evaluated in this order:
//!
//! 1. Sleep duration (>= 7.5h: +15, < 6h: -20, otherwise +5)
//! 2. Sleep quality (< 0.75: -10)
//! 3. Resting heart rate (<= 60: +15, > 65: -15; 61-65 no change)
//! 4. HRV (>= 65: +15, < 40: -20; 40-64 no change)
//! 5. Steps (>= 10000: +10)
//! 6. Overtraining risk (zone minutes > 60 and HRV < 45: insight only)
//!
//! The total is then clamped to [0, 100].

use crate::metrics::{HealthSnapshot, WellnessResult};

const BASELINE: i32 = 50;
const MIN_SCORE: i32 = 0;
const MAX_SCORE: i32 = 100;

// Sleep
const LONG_SLEEP_HOURS: f64 = 7.5;
const SHORT_SLEEP_HOURS: f64 = 6.0;
const LONG_SLEEP_BONUS: i32 = 15;
const SHORT_SLEEP_PENALTY: i32 = -20;
const ADEQUATE_SLEEP_BONUS: i32 = 5;
const POOR_QUALITY_THRESHOLD: f64 = 0.75;
const POOR_QUALITY_PENALTY: i32 = -10;

// Heart rate (bpm / ms)
const LOW_RESTING_BPM: u64 = 60;
const ELEVATED_RESTING_BPM: u64 = 65;
const LOW_RESTING_BONUS: i32 = 15;
const ELEVATED_RESTING_PENALTY: i32 = -15;
const HIGH_HRV_MS: u64 = 65;
const LOW_HRV_MS: u64 = 40;
const HIGH_HRV_BONUS: i32 = 15;
const LOW_HRV_PENALTY: i32 = -20;

// Activity
const STEP_GOAL: u64 = 10_000;
const STEP_GOAL_BONUS: i32 = 10;
const OVERTRAINING_ZONE_MINUTES: u64 = 60;
const OVERTRAINING_HRV_MS: u64 = 45;

pub const INSIGHT_LONG_SLEEP: &str = "Excellent sleep duration has prepared your body for the day.";
pub const INSIGHT_SHORT_SLEEP: &str =
    "Short sleep duration may impact your cognitive function and physical performance. Prioritize rest.";
pub const INSIGHT_ELEVATED_RESTING: &str =
    "Your resting heart rate is elevated, suggesting your body is under stress. Consider a lighter day.";
pub const INSIGHT_HIGH_HRV: &str =
    "A high HRV indicates your nervous system is well-recovered and ready for strain.";
pub const INSIGHT_LOW_HRV: &str = "Low HRV is a sign of fatigue. Focus on recovery activities.";
pub const INSIGHT_OVERTRAINING: &str =
    "High activity levels combined with low recovery metrics suggest a risk of overtraining.";
pub const INSIGHT_BALANCED: &str = "Your metrics are balanced. A good day to maintain your routine.";

/// Score one day's snapshot.
///
/// Total over every validated snapshot: always returns a score in [0, 100]
/// and a non-empty insight.
///
/// # Examples
///
/// ```
/// use wellness_common::{score, ActivityMetrics, HealthSnapshot, HeartRateMetrics, SleepMetrics};
///
/// let snapshot = HealthSnapshot::new(
///     SleepMetrics::new(7.0, 0.8, 0.2).unwrap(),
///     HeartRateMetrics::new(63, 50).unwrap(),
///     ActivityMetrics::new(5000, 0).unwrap(),
/// );
/// let result = score(&snapshot);
/// assert_eq!(result.score, 55);
/// ```
pub fn score(snapshot: &HealthSnapshot) -> WellnessResult {
    let sleep = snapshot.sleep();
    let heart = snapshot.heart_rate();
    let activity = snapshot.activity();

    let mut total = BASELINE;
    let mut insights: Vec<&'static str> = Vec::new();

    if sleep.duration() >= LONG_SLEEP_HOURS {
        total += LONG_SLEEP_BONUS;
        insights.push(INSIGHT_LONG_SLEEP);
    } else if sleep.duration() < SHORT_SLEEP_HOURS {
        total += SHORT_SLEEP_PENALTY;
        insights.push(INSIGHT_SHORT_SLEEP);
    } else {
        total += ADEQUATE_SLEEP_BONUS;
    }

    if sleep.quality() < POOR_QUALITY_THRESHOLD {
        total += POOR_QUALITY_PENALTY;
    }

    if heart.resting() <= LOW_RESTING_BPM {
        total += LOW_RESTING_BONUS;
    } else if heart.resting() > ELEVATED_RESTING_BPM {
        total += ELEVATED_RESTING_PENALTY;
        insights.push(INSIGHT_ELEVATED_RESTING);
    }

    if heart.hrv() >= HIGH_HRV_MS {
        total += HIGH_HRV_BONUS;
        insights.push(INSIGHT_HIGH_HRV);
    } else if heart.hrv() < LOW_HRV_MS {
        total += LOW_HRV_PENALTY;
        insights.push(INSIGHT_LOW_HRV);
    }

    if activity.steps() >= STEP_GOAL {
        total += STEP_GOAL_BONUS;
    }

    if activity.zone_minutes() > OVERTRAINING_ZONE_MINUTES && heart.hrv() < OVERTRAINING_HRV_MS {
        insights.push(INSIGHT_OVERTRAINING);
    }

    // Clamped into [0, 100], so the cast cannot truncate
    let score = total.clamp(MIN_SCORE, MAX_SCORE) as u8;

    let insight = if insights.is_empty() {
        INSIGHT_BALANCED.to_string()
    } else {
        insights.join(" ")
    };

    WellnessResult { score, insight }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ActivityMetrics, HeartRateMetrics, SleepMetrics};

    fn snapshot(
        duration: f64,
        quality: f64,
        resting: i64,
        hrv: i64,
        steps: i64,
        zone_minutes: i64,
    ) -> HealthSnapshot {
        HealthSnapshot::new(
            SleepMetrics::new(duration, quality, 0.2).unwrap(),
            HeartRateMetrics::new(resting, hrv).unwrap(),
            ActivityMetrics::new(steps, zone_minutes).unwrap(),
        )
    }

    /// Neutral reading: middle sleep band, good quality, both heart dead zones
    fn neutral() -> HealthSnapshot {
        snapshot(7.0, 0.8, 63, 50, 5000, 0)
    }

    #[test]
    fn test_scenario_strong_day_clamps_to_100() {
        let result = score(&snapshot(8.0, 0.9, 55, 70, 12000, 30));
        assert_eq!(result.score, 100);
        assert_eq!(result.insight, format!("{} {}", INSIGHT_LONG_SLEEP, INSIGHT_HIGH_HRV));
    }

    #[test]
    fn test_scenario_depleted_day_clamps_to_0() {
        let result = score(&snapshot(5.0, 0.5, 70, 35, 2000, 70));
        assert_eq!(result.score, 0);
        assert_eq!(
            result.insight,
            [
                INSIGHT_SHORT_SLEEP,
                INSIGHT_ELEVATED_RESTING,
                INSIGHT_LOW_HRV,
                INSIGHT_OVERTRAINING
            ]
            .join(" ")
        );
    }

    #[test]
    fn test_scenario_neutral_day_gets_balanced_message() {
        let result = score(&neutral());
        assert_eq!(result.score, 55);
        assert_eq!(result.insight, INSIGHT_BALANCED);
    }

    #[test]
    fn test_duration_boundary_7_5_is_long_sleep() {
        let result = score(&snapshot(7.5, 0.8, 63, 50, 5000, 0));
        assert_eq!(result.score, 65);
        assert_eq!(result.insight, INSIGHT_LONG_SLEEP);
    }

    #[test]
    fn test_duration_boundary_6_is_middle_band() {
        let result = score(&snapshot(6.0, 0.8, 63, 50, 5000, 0));
        assert_eq!(result.score, 55);

        let result = score(&snapshot(5.99, 0.8, 63, 50, 5000, 0));
        assert_eq!(result.score, 30);
        assert_eq!(result.insight, INSIGHT_SHORT_SLEEP);
    }

    #[test]
    fn test_quality_penalty_has_no_insight() {
        let result = score(&snapshot(7.0, 0.74, 63, 50, 5000, 0));
        assert_eq!(result.score, 45);
        assert_eq!(result.insight, INSIGHT_BALANCED);

        let result = score(&snapshot(7.0, 0.75, 63, 50, 5000, 0));
        assert_eq!(result.score, 55);
    }

    #[test]
    fn test_resting_heart_rate_bands() {
        assert_eq!(score(&snapshot(7.0, 0.8, 60, 50, 5000, 0)).score, 70);
        assert_eq!(score(&snapshot(7.0, 0.8, 61, 50, 5000, 0)).score, 55);
        assert_eq!(score(&snapshot(7.0, 0.8, 65, 50, 5000, 0)).score, 55);

        let elevated = score(&snapshot(7.0, 0.8, 66, 50, 5000, 0));
        assert_eq!(elevated.score, 40);
        assert_eq!(elevated.insight, INSIGHT_ELEVATED_RESTING);
    }

    #[test]
    fn test_low_resting_heart_rate_has_no_insight() {
        let result = score(&snapshot(7.0, 0.8, 50, 50, 5000, 0));
        assert_eq!(result.insight, INSIGHT_BALANCED);
    }

    #[test]
    fn test_hrv_boundaries() {
        let high = score(&snapshot(7.0, 0.8, 63, 65, 5000, 0));
        assert_eq!(high.score, 70);
        assert_eq!(high.insight, INSIGHT_HIGH_HRV);

        let at_forty = score(&snapshot(7.0, 0.8, 63, 40, 5000, 0));
        assert_eq!(at_forty.score, 55);
        assert_eq!(at_forty.insight, INSIGHT_BALANCED);

        assert_eq!(score(&snapshot(7.0, 0.8, 63, 64, 5000, 0)).score, 55);

        let low = score(&snapshot(7.0, 0.8, 63, 39, 5000, 0));
        assert_eq!(low.score, 35);
        assert_eq!(low.insight, INSIGHT_LOW_HRV);
    }

    #[test]
    fn test_step_goal_bonus() {
        assert_eq!(score(&snapshot(7.0, 0.8, 63, 50, 10000, 0)).score, 65);
        assert_eq!(score(&snapshot(7.0, 0.8, 63, 50, 9999, 0)).score, 55);
    }

    #[test]
    fn test_overtraining_rule_changes_insight_only() {
        // hrv 44 sits in the HRV dead zone, so only the combined rule fires
        let result = score(&snapshot(7.0, 0.8, 63, 44, 5000, 61));
        assert_eq!(result.score, 55);
        assert_eq!(result.insight, INSIGHT_OVERTRAINING);

        assert_eq!(score(&snapshot(7.0, 0.8, 63, 44, 5000, 60)).insight, INSIGHT_BALANCED);
        assert_eq!(score(&snapshot(7.0, 0.8, 63, 45, 5000, 61)).insight, INSIGHT_BALANCED);
    }

    #[test]
    fn test_overtraining_fires_regardless_of_steps() {
        let result = score(&snapshot(7.0, 0.8, 63, 44, 25000, 90));
        assert_eq!(result.score, 65);
        assert_eq!(result.insight, INSIGHT_OVERTRAINING);
    }

    #[test]
    fn test_contradictory_heart_signals_combine_additively() {
        // Good resting heart rate with poor HRV
        let result = score(&snapshot(7.0, 0.8, 55, 30, 5000, 0));
        assert_eq!(result.score, 50);
        assert_eq!(result.insight, INSIGHT_LOW_HRV);
    }

    #[test]
    fn test_extreme_inputs_stay_in_range() {
        let extremes = [
            snapshot(f64::MAX, 1.0, 1, u32::MAX as i64, i64::MAX, i64::MAX),
            snapshot(f64::MIN_POSITIVE, 0.0, i64::MAX, 1, 0, i64::MAX),
            snapshot(24.0, 0.0, 200, 1, 0, 0),
        ];
        for snapshot in extremes {
            let result = score(&snapshot);
            assert!(result.score <= 100);
            assert!(!result.insight.is_empty());
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let input = snapshot(5.5, 0.6, 68, 42, 11000, 75);
        let first = score(&input);
        for _ in 0..10 {
            assert_eq!(score(&input), first);
        }
    }
}

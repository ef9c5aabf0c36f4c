//! Daily health metric types
//!
//! A [`HealthSnapshot`] is one day's readings for one implicit user. Values of
//! these types are always within range: they can only be obtained through the
//! range-checked constructors below or through [`crate::validation::validate`].

use serde::Serialize;

use crate::validation::{Constraint, ValidationErrors, Violations};

/// Sleep readings for the previous night
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepMetrics {
    pub(crate) duration: f64,
    pub(crate) quality: f64,
    pub(crate) deep_percent: f64,
}

impl SleepMetrics {
    /// Create sleep metrics.
    ///
    /// `duration` is in hours and must be > 0; `quality` and `deep_percent`
    /// are ratios in [0, 1].
    pub fn new(duration: f64, quality: f64, deep_percent: f64) -> Result<Self, ValidationErrors> {
        let mut violations = Violations::default();
        violations.check("sleep.duration", duration, Constraint::Positive);
        violations.check("sleep.quality", quality, Constraint::UnitInterval);
        violations.check("sleep.deepPercent", deep_percent, Constraint::UnitInterval);
        violations.finish(|| Self {
            duration,
            quality,
            deep_percent,
        })
    }

    /// Total sleep in hours
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }

    /// Fraction of sleep spent in deep sleep
    pub fn deep_percent(&self) -> f64 {
        self.deep_percent
    }
}

/// Heart rate readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartRateMetrics {
    pub(crate) resting: u64,
    pub(crate) hrv: u64,
}

impl HeartRateMetrics {
    /// Create heart rate metrics; both values must be > 0.
    pub fn new(resting: i64, hrv: i64) -> Result<Self, ValidationErrors> {
        let mut violations = Violations::default();
        violations.check_integer("heartRate.resting", resting, Constraint::Positive);
        violations.check_integer("heartRate.hrv", hrv, Constraint::Positive);
        violations.finish(|| Self {
            resting: resting as u64,
            hrv: hrv as u64,
        })
    }

    /// Resting heart rate in beats per minute
    pub fn resting(&self) -> u64 {
        self.resting
    }

    /// Heart rate variability in milliseconds
    pub fn hrv(&self) -> u64 {
        self.hrv
    }
}

/// Activity totals for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityMetrics {
    pub(crate) steps: u64,
    pub(crate) zone_minutes: u64,
}

impl ActivityMetrics {
    /// Create activity metrics; both counts must be >= 0.
    pub fn new(steps: i64, zone_minutes: i64) -> Result<Self, ValidationErrors> {
        let mut violations = Violations::default();
        violations.check_integer("activity.steps", steps, Constraint::NonNegative);
        violations.check_integer("activity.zoneMinutes", zone_minutes, Constraint::NonNegative);
        violations.finish(|| Self {
            steps: steps as u64,
            zone_minutes: zone_minutes as u64,
        })
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Minutes spent in an elevated heart rate zone
    pub fn zone_minutes(&self) -> u64 {
        self.zone_minutes
    }
}

/// One day's validated readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthSnapshot {
    sleep: SleepMetrics,
    heart_rate: HeartRateMetrics,
    activity: ActivityMetrics,
}

impl HealthSnapshot {
    /// Combine already-validated components
    pub fn new(sleep: SleepMetrics, heart_rate: HeartRateMetrics, activity: ActivityMetrics) -> Self {
        Self {
            sleep,
            heart_rate,
            activity,
        }
    }

    pub fn sleep(&self) -> &SleepMetrics {
        &self.sleep
    }

    pub fn heart_rate(&self) -> &HeartRateMetrics {
        &self.heart_rate
    }

    pub fn activity(&self) -> &ActivityMetrics {
        &self.activity
    }
}

/// Score and insight returned for a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellnessResult {
    /// Wellness score, always within [0, 100]
    pub score: u8,
    /// One or more insight sentences, never empty
    pub insight: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_constructor_checks_every_field() {
        let errors = SleepMetrics::new(0.0, 1.5, -0.1).unwrap_err();
        assert_eq!(
            errors.fields(),
            vec!["sleep.duration", "sleep.quality", "sleep.deepPercent"]
        );
    }

    #[test]
    fn test_sleep_constructor_rejects_nan() {
        let errors = SleepMetrics::new(f64::NAN, 0.5, 0.5).unwrap_err();
        assert!(errors.contains("sleep.duration", Constraint::Positive));
    }

    #[test]
    fn test_heart_rate_constructor() {
        let heart = HeartRateMetrics::new(58, 72).unwrap();
        assert_eq!(heart.resting(), 58);
        assert_eq!(heart.hrv(), 72);

        let errors = HeartRateMetrics::new(0, -1).unwrap_err();
        assert!(errors.contains("heartRate.resting", Constraint::Positive));
        assert!(errors.contains("heartRate.hrv", Constraint::Positive));
    }

    #[test]
    fn test_activity_constructor_allows_zero() {
        let activity = ActivityMetrics::new(0, 0).unwrap();
        assert_eq!(activity.steps(), 0);
        assert_eq!(activity.zone_minutes(), 0);

        let errors = ActivityMetrics::new(-5, 0).unwrap_err();
        assert_eq!(errors.fields(), vec!["activity.steps"]);
    }

    #[test]
    fn test_wellness_result_serializes_to_wire_shape() {
        let result = WellnessResult {
            score: 55,
            insight: "ok".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "score": 55, "insight": "ok" }));
    }
}

//! Health payload validation
//!
//! Turns a raw JSON request body into a [`HealthSnapshot`], or reports every
//! field that is missing, wrongly typed, or outside its allowed range.
//!
//! Field paths use the canonical wire names (`sleep.deepPercent`,
//! `heartRate.resting`, ...) even when the payload used a snake_case alias.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::metrics::{ActivityMetrics, HealthSnapshot, HeartRateMetrics, SleepMetrics};

/// JSON type a field was expected to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    Number,
    Integer,
    Object,
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedType::Number => write!(f, "a number"),
            ExpectedType::Integer => write!(f, "an integer"),
            ExpectedType::Object => write!(f, "an object"),
        }
    }
}

/// Constraint a field violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Field is absent
    Required,
    /// Field is present but has the wrong JSON type
    Type { expected: ExpectedType },
    /// Value must be strictly greater than zero
    Positive,
    /// Value must lie in [0, 1] inclusive
    UnitInterval,
    /// Value must be zero or greater
    NonNegative,
    /// Integer does not fit in 64 unsigned bits
    TooLarge,
}

impl Constraint {
    /// Short machine-readable code for API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::Type { .. } => "type",
            Constraint::Positive => "positive",
            Constraint::UnitInterval => "unit_interval",
            Constraint::NonNegative => "non_negative",
            Constraint::TooLarge => "too_large",
        }
    }

    /// Whether a real-valued reading satisfies this range constraint.
    ///
    /// NaN never satisfies any range.
    pub fn admits(&self, value: f64) -> bool {
        match self {
            Constraint::Positive => value > 0.0,
            Constraint::UnitInterval => (0.0..=1.0).contains(&value),
            Constraint::NonNegative => value >= 0.0,
            Constraint::TooLarge => value <= u64::MAX as f64,
            Constraint::Required | Constraint::Type { .. } => true,
        }
    }

    /// Whether an integer reading satisfies this range constraint
    pub fn admits_integer(&self, value: i128) -> bool {
        match self {
            Constraint::Positive => value > 0,
            Constraint::UnitInterval => (0..=1).contains(&value),
            Constraint::NonNegative => value >= 0,
            Constraint::TooLarge => value <= i128::from(u64::MAX),
            Constraint::Required | Constraint::Type { .. } => true,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => write!(f, "field required"),
            Constraint::Type { expected } => write!(f, "must be {}", expected),
            Constraint::Positive => write!(f, "must be greater than 0"),
            Constraint::UnitInterval => write!(f, "must be between 0 and 1 inclusive"),
            Constraint::NonNegative => write!(f, "must be greater than or equal to 0"),
            Constraint::TooLarge => write!(f, "must be at most {}", u64::MAX),
        }
    }
}

/// A single field-level validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `sleep.duration`
    pub field: String,
    /// The constraint that was violated
    pub constraint: Constraint,
}

/// All field-level failures found in one payload (never empty)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_errors(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    fn single(field: &str, constraint: Constraint) -> Self {
        Self(vec![ValidationError {
            field: field.to_string(),
            constraint,
        }])
    }

    /// Failures in the order they were found
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Paths of the offending fields
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    /// Whether `field` has a failure with the given constraint
    pub fn contains(&self, field: &str, constraint: Constraint) -> bool {
        self.0
            .iter()
            .any(|e| e.field == field && e.constraint == constraint)
    }
}

/// Accumulates failures while a payload or constructor is checked
#[derive(Debug, Default)]
pub(crate) struct Violations {
    errors: Vec<ValidationError>,
}

impl Violations {
    pub(crate) fn push(&mut self, field: String, constraint: Constraint) {
        self.errors.push(ValidationError { field, constraint });
    }

    /// Record a failure unless `value` satisfies `constraint`
    pub(crate) fn check(&mut self, field: &str, value: f64, constraint: Constraint) {
        if !constraint.admits(value) {
            self.push(field.to_string(), constraint);
        }
    }

    /// Record a failure unless integer `value` satisfies `constraint`
    pub(crate) fn check_integer(&mut self, field: &str, value: i64, constraint: Constraint) {
        if !constraint.admits_integer(i128::from(value)) {
            self.push(field.to_string(), constraint);
        }
    }

    /// Build the value if nothing was recorded
    pub(crate) fn finish<T>(self, build: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(build())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// Validate a raw request body into a [`HealthSnapshot`].
///
/// Expected shape:
///
/// ```json
/// {
///   "sleep": { "duration": 8.0, "quality": 0.9, "deepPercent": 0.2 },
///   "heartRate": { "resting": 55, "hrv": 70 },
///   "activity": { "steps": 12000, "zoneMinutes": 30 }
/// }
/// ```
///
/// Every violation is collected before returning, in document order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use wellness_common::validation::{validate, Constraint};
///
/// let payload = json!({
///     "sleep": { "duration": 0, "quality": 0.9, "deepPercent": 0.2 },
///     "heartRate": { "resting": 55, "hrv": 70 },
///     "activity": { "steps": 12000, "zoneMinutes": 30 }
/// });
/// let errors = validate(&payload).unwrap_err();
/// assert!(errors.contains("sleep.duration", Constraint::Positive));
/// ```
pub fn validate(payload: &Value) -> Result<HealthSnapshot, ValidationErrors> {
    let Some(body) = payload.as_object() else {
        return Err(ValidationErrors::single(
            "body",
            Constraint::Type {
                expected: ExpectedType::Object,
            },
        ));
    };

    let mut violations = Violations::default();

    let sleep = section(body, "sleep", &[], &mut violations);
    let duration = sleep.and_then(|s| number(s, "sleep.duration", &[], Constraint::Positive, &mut violations));
    let quality = sleep.and_then(|s| number(s, "sleep.quality", &[], Constraint::UnitInterval, &mut violations));
    let deep_percent = sleep.and_then(|s| {
        number(s, "sleep.deepPercent", &["deep_percent"], Constraint::UnitInterval, &mut violations)
    });

    let heart = section(body, "heartRate", &["heart_rate"], &mut violations);
    let resting = heart.and_then(|h| integer(h, "heartRate.resting", &[], Constraint::Positive, &mut violations));
    let hrv = heart.and_then(|h| integer(h, "heartRate.hrv", &[], Constraint::Positive, &mut violations));

    let activity = section(body, "activity", &[], &mut violations);
    let steps = activity.and_then(|a| integer(a, "activity.steps", &[], Constraint::NonNegative, &mut violations));
    let zone_minutes = activity.and_then(|a| {
        integer(a, "activity.zoneMinutes", &["zone_minutes"], Constraint::NonNegative, &mut violations)
    });

    match (duration, quality, deep_percent, resting, hrv, steps, zone_minutes) {
        (
            Some(duration),
            Some(quality),
            Some(deep_percent),
            Some(resting),
            Some(hrv),
            Some(steps),
            Some(zone_minutes),
        ) => violations.finish(|| {
            HealthSnapshot::new(
                SleepMetrics {
                    duration,
                    quality,
                    deep_percent,
                },
                HeartRateMetrics {
                    resting,
                    hrv,
                },
                ActivityMetrics {
                    steps,
                    zone_minutes,
                },
            )
        }),
        // At least one extractor returned None, which always records a violation
        _ => Err(ValidationErrors(violations.errors)),
    }
}

impl TryFrom<&Value> for HealthSnapshot {
    type Error = ValidationErrors;

    fn try_from(payload: &Value) -> Result<Self, Self::Error> {
        validate(payload)
    }
}

/// Last segment of a dotted path
fn key_of(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

fn lookup<'a>(object: &'a Map<String, Value>, key: &str, aliases: &[&str]) -> Option<&'a Value> {
    object
        .get(key)
        .or_else(|| aliases.iter().find_map(|alias| object.get(*alias)))
}

fn section<'a>(
    body: &'a Map<String, Value>,
    name: &str,
    aliases: &[&str],
    violations: &mut Violations,
) -> Option<&'a Map<String, Value>> {
    match lookup(body, name, aliases) {
        None => {
            violations.push(name.to_string(), Constraint::Required);
            None
        }
        Some(value) => {
            let object = value.as_object();
            if object.is_none() {
                violations.push(
                    name.to_string(),
                    Constraint::Type {
                        expected: ExpectedType::Object,
                    },
                );
            }
            object
        }
    }
}

/// Extract a real-valued field; `None` means a violation was recorded
fn number(
    object: &Map<String, Value>,
    path: &str,
    aliases: &[&str],
    constraint: Constraint,
    violations: &mut Violations,
) -> Option<f64> {
    let Some(raw) = lookup(object, key_of(path), aliases) else {
        violations.push(path.to_string(), Constraint::Required);
        return None;
    };
    let Some(value) = raw.as_f64() else {
        violations.push(
            path.to_string(),
            Constraint::Type {
                expected: ExpectedType::Number,
            },
        );
        return None;
    };
    if !constraint.admits(value) {
        violations.push(path.to_string(), constraint);
        return None;
    }
    Some(value)
}

/// Extract an integer field; `None` means a violation was recorded.
///
/// Floats with no fractional part (`70.0`) are accepted as integers. Values
/// past `u64::MAX` are range violations, not type errors.
fn integer(
    object: &Map<String, Value>,
    path: &str,
    aliases: &[&str],
    constraint: Constraint,
    violations: &mut Violations,
) -> Option<u64> {
    let Some(raw) = lookup(object, key_of(path), aliases) else {
        violations.push(path.to_string(), Constraint::Required);
        return None;
    };
    let Some(value) = as_integer(raw) else {
        violations.push(
            path.to_string(),
            Constraint::Type {
                expected: ExpectedType::Integer,
            },
        );
        return None;
    };
    if !constraint.admits_integer(value) {
        violations.push(path.to_string(), constraint);
        return None;
    }
    match u64::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            violations.push(path.to_string(), Constraint::TooLarge);
            None
        }
    }
}

/// Integer value of a JSON number. `f as i128` saturates, so huge integral
/// floats still land past `u64::MAX` and fail the range check.
fn as_integer(value: &Value) -> Option<i128> {
    if let Some(v) = value.as_i64() {
        return Some(i128::from(v));
    }
    if let Some(v) = value.as_u64() {
        return Some(i128::from(v));
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i128)
}

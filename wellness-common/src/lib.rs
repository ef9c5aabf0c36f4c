//! # Wellness Common Library
//!
//! Shared code for the wellness service:
//! - Daily health metric types (sleep, heart rate, activity)
//! - Payload validation into a `HealthSnapshot`
//! - Rule-based wellness scoring
//! - Bootstrap configuration loading

pub mod config;
pub mod error;
pub mod metrics;
pub mod scoring;
pub mod validation;

pub use error::{Error, Result};
pub use metrics::{ActivityMetrics, HealthSnapshot, HeartRateMetrics, SleepMetrics, WellnessResult};
pub use scoring::score;
pub use validation::{validate, Constraint, ValidationError, ValidationErrors};

//! Failure-risk scoring
//!
//! Deterministic weighted linear score over the snapshot, not a trained
//! model. Each term measures how far a reading sits above the bottom of its
//! range:
//!
//! ```text
//! score = 0.7 * (temperature - 90)
//!       + 0.6 * (pressure - 40)
//!       + 10  * (vibration - 0.2)
//!       + (cycle_count - 10000) / 500
//! ```
//!
//! The score is rounded to two decimals and clamped to 0..=100, then mapped
//! to a [`RiskLevel`] and a maintenance date `max(1, 30 - floor(score / 3))`
//! days out.

use chrono::{Days, NaiveDate};

use crate::types::{round2, Prediction, RiskLevel, Snapshot};

/// Weight per °C above the temperature floor
const TEMPERATURE_WEIGHT: f64 = 0.7;
const TEMPERATURE_BASE_C: f64 = 90.0;
/// Weight per bar above the pressure floor
const PRESSURE_WEIGHT: f64 = 0.6;
const PRESSURE_BASE_BAR: f64 = 40.0;
/// Weight per g above the vibration floor
const VIBRATION_WEIGHT: f64 = 10.0;
const VIBRATION_BASE_G: f64 = 0.2;
/// Cycles per score point above the cycle floor
const CYCLES_PER_POINT: f64 = 500.0;
const CYCLE_BASE: f64 = 10_000.0;

/// Longest maintenance horizon, reached at score 0 (days)
pub const MAX_MAINTENANCE_DAYS: i64 = 30;
/// Score points per day pulled in
const SCORE_POINTS_PER_DAY: f64 = 3.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct RiskPredictor;

impl RiskPredictor {
    pub fn new() -> Self {
        Self
    }

    /// Predict failure risk for `snapshot`, scheduling maintenance from `today`.
    pub fn predict(&self, snapshot: &Snapshot, today: NaiveDate) -> Prediction {
        let failure_probability = failure_probability(snapshot);
        let days = days_until_maintenance(failure_probability);

        Prediction {
            failure_probability,
            risk_level: RiskLevel::from_probability(failure_probability),
            maintenance_date: today + Days::new(days),
        }
    }
}

/// Raw weighted score, rounded to two decimals and clamped to 0..=100.
pub fn failure_probability(snapshot: &Snapshot) -> f64 {
    let score = TEMPERATURE_WEIGHT * (snapshot.temperature - TEMPERATURE_BASE_C)
        + PRESSURE_WEIGHT * (snapshot.pressure - PRESSURE_BASE_BAR)
        + VIBRATION_WEIGHT * (snapshot.vibration - VIBRATION_BASE_G)
        + (f64::from(snapshot.cycle_count) - CYCLE_BASE) / CYCLES_PER_POINT;

    let rounded = round2(score);
    // Small negatives round to -0.0, which must not reach the wire
    if rounded <= 0.0 {
        0.0
    } else {
        rounded.min(100.0)
    }
}

/// Days until the next maintenance, never less than one.
pub fn days_until_maintenance(failure_probability: f64) -> u64 {
    // failure_probability is clamped to 0..=100, so the floor fits easily
    let pulled_in = (failure_probability / SCORE_POINTS_PER_DAY).floor() as i64;
    (MAX_MAINTENANCE_DAYS - pulled_in).max(1) as u64
}

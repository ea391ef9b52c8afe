//! Failure-risk prediction

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Probability below this is `Low` (%)
pub const RISK_MODERATE_FROM: f64 = 30.0;
/// Probability at or above this is `High` (%)
pub const RISK_HIGH_FROM: f64 = 65.0;

/// Coarse classification of failure probability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low = 0,
    Moderate = 1,
    High = 2,
}

impl RiskLevel {
    /// Boundaries belong to the higher tier: 30.0 is Moderate, 65.0 is High.
    pub fn from_probability(probability: f64) -> Self {
        if probability < RISK_MODERATE_FROM {
            RiskLevel::Low
        } else if probability < RISK_HIGH_FROM {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Output of the risk predictor for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Heuristic failure probability (%), 0..=100, 2 decimals
    pub failure_probability: f64,
    pub risk_level: RiskLevel,
    /// Serialized as `YYYY-MM-DD`
    pub maintenance_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(29.99), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(30.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(64.99), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(65.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(100.0), RiskLevel::High);
    }

    #[test]
    fn test_risk_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
    }
}

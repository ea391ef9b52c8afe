//! Threshold alert events

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::time_format;

/// Which threshold check fired.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AlertKind {
    #[serde(rename = "Temperature High")]
    TemperatureHigh,
    #[serde(rename = "Pressure High")]
    PressureHigh,
    #[serde(rename = "Vibration Spike")]
    VibrationSpike,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::TemperatureHigh => write!(f, "Temperature High"),
            AlertKind::PressureHigh => write!(f, "Pressure High"),
            AlertKind::VibrationSpike => write!(f, "Vibration Spike"),
        }
    }
}

/// A single alert raised while evaluating one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEvent {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    /// Wall-clock time of evaluation, whole seconds
    #[serde(with = "time_format")]
    pub timestamp: NaiveTime,
}

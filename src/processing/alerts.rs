//! Threshold alert evaluation.
//!
//! Checks run in a fixed order (temperature, pressure, vibration) and each
//! one that trips appends its own event, so a single snapshot can raise
//! zero to three alerts.

use tracing::warn;

use crate::clock::Clock;
use crate::config::AlertThresholds;
use crate::types::{AlertEvent, AlertKind, Snapshot};

/// Stateless evaluator holding the configured limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertEvaluator {
    thresholds: AlertThresholds,
}

impl AlertEvaluator {
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// Evaluate one snapshot. Each event is stamped with its own clock read.
    pub fn evaluate(&self, snapshot: &Snapshot, clock: &impl Clock) -> Vec<AlertEvent> {
        let t = &self.thresholds;
        let mut alerts = Vec::with_capacity(3);

        if snapshot.temperature > t.temperature_high_c {
            alerts.push(Self::raise(
                AlertKind::TemperatureHigh,
                format!("Temperature reached {}°C", format_reading(snapshot.temperature)),
                clock,
            ));
        }

        if snapshot.pressure > t.pressure_high_bar {
            alerts.push(Self::raise(
                AlertKind::PressureHigh,
                format!("Pressure reached {} bar", format_reading(snapshot.pressure)),
                clock,
            ));
        }

        if snapshot.vibration > t.vibration_spike_g {
            alerts.push(Self::raise(
                AlertKind::VibrationSpike,
                format!("Unusual vibration detected ({} g)", format_reading(snapshot.vibration)),
                clock,
            ));
        }

        alerts
    }

    fn raise(kind: AlertKind, message: String, clock: &impl Clock) -> AlertEvent {
        warn!(alert = %kind, "{}", message);
        AlertEvent {
            kind,
            message,
            timestamp: clock.time_of_day(),
        }
    }
}

/// Shortest representation, but whole numbers keep one decimal ("125.0").
fn format_reading(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

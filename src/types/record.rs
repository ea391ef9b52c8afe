//! History projection and the per-tick emission record

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{time_format, AlertEvent, MachineStatus, Prediction, Snapshot};

/// Reduced projection of a snapshot kept in the rolling history.
///
/// Deliberately excludes cycle count, status, alerts and prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(with = "time_format")]
    pub timestamp: NaiveTime,
    pub temperature: f64,
    pub pressure: f64,
    pub vibration: f64,
}

impl HistoryEntry {
    pub fn from_snapshot(snapshot: &Snapshot, timestamp: NaiveTime) -> Self {
        Self {
            timestamp,
            temperature: snapshot.temperature,
            pressure: snapshot.pressure,
            vibration: snapshot.vibration,
        }
    }
}

/// Everything emitted for one tick, handed to the transport by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionRecord {
    pub temperature: f64,
    pub pressure: f64,
    pub vibration: f64,
    pub cycle_count: u32,
    pub status: MachineStatus,
    /// Emission moment, local time
    #[serde(with = "time_format")]
    pub timestamp: NaiveTime,
    pub alerts: Vec<AlertEvent>,
    pub prediction: Prediction,
    /// Oldest first, at most 20 entries
    pub history: Vec<HistoryEntry>,
}

impl EmissionRecord {
    pub fn assemble(
        snapshot: &Snapshot,
        timestamp: NaiveTime,
        alerts: Vec<AlertEvent>,
        prediction: Prediction,
        history: Vec<HistoryEntry>,
    ) -> Self {
        Self {
            temperature: snapshot.temperature,
            pressure: snapshot.pressure,
            vibration: snapshot.vibration,
            cycle_count: snapshot.cycle_count,
            status: snapshot.status(),
            timestamp,
            alerts,
            prediction,
            history,
        }
    }

    /// The snapshot this record was assembled from.
    #[cfg(test)]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.temperature, self.pressure, self.vibration, self.cycle_count)
    }
}

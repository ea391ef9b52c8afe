//! Sensor snapshot and derived machine status

use serde::{Deserialize, Serialize};

/// Temperature at or above which the machine reports `Error` (°C)
pub const STATUS_ERROR_TEMPERATURE_C: f64 = 130.0;
/// Pressure at or above which the machine reports `Error` (bar)
pub const STATUS_ERROR_PRESSURE_BAR: f64 = 80.0;

/// Coarse machine status, derived from temperature and pressure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MachineStatus {
    Running,
    Error,
}

impl MachineStatus {
    /// `Error` iff temperature >= 130 °C or pressure >= 80 bar.
    pub fn from_readings(temperature: f64, pressure: f64) -> Self {
        if temperature >= STATUS_ERROR_TEMPERATURE_C || pressure >= STATUS_ERROR_PRESSURE_BAR {
            MachineStatus::Error
        } else {
            MachineStatus::Running
        }
    }
}

impl std::fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineStatus::Running => write!(f, "Running"),
            MachineStatus::Error => write!(f, "Error"),
        }
    }
}

/// One synthesized instantaneous sensor reading.
///
/// Status is not stored; it is always recomputed from temperature and
/// pressure so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Mold temperature (°C), 90..=135
    pub temperature: f64,
    /// Hydraulic pressure (bar), 40..=85
    pub pressure: f64,
    /// Vibration amplitude (g), 0.2..=3.1
    pub vibration: f64,
    /// Lifetime press cycles, 10 000..=25 000
    pub cycle_count: u32,
}

impl Snapshot {
    pub fn new(temperature: f64, pressure: f64, vibration: f64, cycle_count: u32) -> Self {
        Self {
            temperature,
            pressure,
            vibration,
            cycle_count,
        }
    }

    pub fn status(&self) -> MachineStatus {
        MachineStatus::from_readings(self.temperature, self.pressure)
    }
}

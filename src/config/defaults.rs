//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Pipeline
// ============================================================================

/// Rolling history window capacity (entries).
///
/// 20 ticks at the default 3 s cadence = 1 minute of recent context.
pub const HISTORY_CAPACITY: usize = 20;

/// Interval between emitted records (seconds).
pub const TICK_INTERVAL_SECS: u64 = 3;

// ============================================================================
// Transport
// ============================================================================

/// HTTP client timeout for telemetry uploads (seconds).
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Maximum number of response-body characters echoed to the log.
pub const RESPONSE_LOG_MAX_CHARS: usize = 200;

// ============================================================================
// Machine
// ============================================================================

/// Machine name used when no config file provides one.
pub const MACHINE_NAME: &str = "Hydraulic Rubber Molding Machine - Unit 1";

// ============================================================================
// Alert Thresholds
// ============================================================================

/// Temperature above which a `Temperature High` alert fires (°C).
pub const TEMPERATURE_HIGH_C: f64 = 120.0;

/// Pressure above which a `Pressure High` alert fires (bar).
pub const PRESSURE_HIGH_BAR: f64 = 70.0;

/// Vibration above which a `Vibration Spike` alert fires (g).
pub const VIBRATION_SPIKE_G: f64 = 2.5;

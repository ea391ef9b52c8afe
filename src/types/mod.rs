//! Shared data structures for the machine telemetry pipeline
//!
//! Per tick the pipeline produces:
//! - Snapshot (synthesized sensor reading, status derived on demand)
//! - AlertEvent list (threshold checks against the snapshot)
//! - Prediction (failure probability, risk tier, maintenance date)
//! - HistoryEntry (reduced projection kept in the rolling window)
//! - EmissionRecord (everything above, handed to the transport)

mod alert;
mod prediction;
mod record;
mod snapshot;
pub mod time_format;

pub use alert::*;
pub use prediction::*;
pub use record::*;
pub use snapshot::*;

/// Round to two decimal places.
///
/// Rounds the exact binary value, so 11.995 (stored as 11.99499...) becomes
/// 11.99. Scaling by 100 first would round the product instead and land one
/// cent high on such values.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

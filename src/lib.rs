//! Machine Telemetry: simulated industrial machine telemetry stream
//!
//! Synthesizes sensor readings for a single hydraulic molding machine,
//! derives threshold alerts and a heuristic failure-risk score, keeps a
//! bounded rolling history, and emits the composed record at a fixed cadence.
//!
//! ## Architecture
//!
//! - **Acquisition**: `ReadingGenerator` draws one `Snapshot` per tick
//! - **Processing**: `AlertEvaluator` and `RiskPredictor` analyse the snapshot independently
//! - **Storage**: `HistoryWindow` keeps the last 20 reduced snapshots
//! - **Pipeline**: `RecordComposer` assembles the `EmissionRecord`, `ProcessingLoop` drives the cadence
//! - **Transport**: `TelemetrySink` implementations deliver records (HTTP or stdout)

pub mod acquisition;
pub mod clock;
pub mod config;
pub mod pipeline;
pub mod processing;
pub mod storage;
pub mod transport;
pub mod types;

// Re-export configuration
pub use config::{AlertThresholds, ConfigError, TelemetryConfig};

// Re-export commonly used types
pub use types::{
    AlertEvent, AlertKind, EmissionRecord, HistoryEntry, MachineStatus, Prediction, RiskLevel,
    Snapshot,
};

// Re-export pipeline components
pub use acquisition::ReadingGenerator;
pub use clock::{Clock, FixedClock, SystemClock};
pub use pipeline::{LoopStats, ProcessingLoop, RecordComposer};
pub use processing::{AlertEvaluator, RiskPredictor};
pub use storage::HistoryWindow;
pub use transport::{HttpSink, StdoutSink, TelemetrySink, TransportError};

//! Telemetry Configuration Module
//!
//! Provides alert thresholds and transport settings loaded from TOML files.
//!
//! ## Loading Order
//!
//! 1. `TELEMETRY_CONFIG` environment variable (path to TOML file)
//! 2. `telemetry.toml` in the current working directory
//! 3. Built-in defaults (the stock simulator values)
//!
//! ## Usage
//!
//! ```ignore
//! let config = TelemetryConfig::load();
//! let evaluator = AlertEvaluator::new(config.thresholds);
//! ```

mod telemetry_config;
pub mod defaults;

pub use telemetry_config::*;

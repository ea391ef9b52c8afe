//! Per-snapshot analysis: threshold alerts and failure-risk scoring.
//!
//! Both consume the same snapshot independently and never interact.

pub mod alerts;
pub mod risk;

pub use alerts::AlertEvaluator;
pub use risk::RiskPredictor;

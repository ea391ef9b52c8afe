//! Tick pipeline: record composition and the cadence loop that drives it.

pub mod composer;
pub mod processing_loop;

pub use composer::RecordComposer;
pub use processing_loop::{LoopStats, ProcessingLoop};

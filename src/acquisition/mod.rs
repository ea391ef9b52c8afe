//! Sensor reading acquisition

pub mod generator;

pub use generator::ReadingGenerator;

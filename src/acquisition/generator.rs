//! Synthetic sensor readings for the molding machine.
//!
//! Each field is drawn independently and uniformly over its range. Real
//! values are rounded to two decimals; the cycle count is an inclusive
//! integer draw.

use rand::prelude::*;
use rand_distr::{Distribution, Uniform};

use crate::types::{round2, Snapshot};

// ============================================================================
// Sensor Ranges
// ============================================================================

/// Mold temperature range (°C)
pub const TEMPERATURE_RANGE_C: (f64, f64) = (90.0, 135.0);
/// Hydraulic pressure range (bar)
pub const PRESSURE_RANGE_BAR: (f64, f64) = (40.0, 85.0);
/// Vibration amplitude range (g)
pub const VIBRATION_RANGE_G: (f64, f64) = (0.2, 3.1);
/// Lifetime press cycle range
pub const CYCLE_COUNT_RANGE: (u32, u32) = (10_000, 25_000);

/// Produces one snapshot per call from a private RNG.
pub struct ReadingGenerator {
    rng: StdRng,
    temperature: Uniform<f64>,
    pressure: Uniform<f64>,
    vibration: Uniform<f64>,
    cycle_count: Uniform<u32>,
    readings_generated: u64,
}

impl ReadingGenerator {
    /// Seeded for reproducible runs, entropy-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            temperature: Uniform::new_inclusive(TEMPERATURE_RANGE_C.0, TEMPERATURE_RANGE_C.1),
            pressure: Uniform::new_inclusive(PRESSURE_RANGE_BAR.0, PRESSURE_RANGE_BAR.1),
            vibration: Uniform::new_inclusive(VIBRATION_RANGE_G.0, VIBRATION_RANGE_G.1),
            cycle_count: Uniform::new_inclusive(CYCLE_COUNT_RANGE.0, CYCLE_COUNT_RANGE.1),
            readings_generated: 0,
        }
    }

    /// Draw the next snapshot.
    pub fn generate(&mut self) -> Snapshot {
        self.readings_generated += 1;

        Snapshot {
            temperature: round2(self.temperature.sample(&mut self.rng)),
            pressure: round2(self.pressure.sample(&mut self.rng)),
            vibration: round2(self.vibration.sample(&mut self.rng)),
            cycle_count: self.cycle_count.sample(&mut self.rng),
        }
    }

    pub fn readings_generated(&self) -> u64 {
        self.readings_generated
    }
}

//! Record Composer
//!
//! Runs one tick of generate → evaluate → predict → window → compose and
//! owns the only state that outlives a tick: the history window.

use tracing::debug;

use crate::acquisition::ReadingGenerator;
use crate::clock::{Clock, SystemClock};
use crate::processing::{AlertEvaluator, RiskPredictor};
use crate::storage::HistoryWindow;
use crate::types::{EmissionRecord, HistoryEntry};

pub struct RecordComposer<C: Clock = SystemClock> {
    generator: ReadingGenerator,
    evaluator: AlertEvaluator,
    predictor: RiskPredictor,
    history: HistoryWindow,
    clock: C,
}

impl RecordComposer<SystemClock> {
    pub fn new(generator: ReadingGenerator, evaluator: AlertEvaluator) -> Self {
        Self::with_clock(generator, evaluator, SystemClock)
    }
}

impl<C: Clock> RecordComposer<C> {
    pub fn with_clock(generator: ReadingGenerator, evaluator: AlertEvaluator, clock: C) -> Self {
        Self {
            generator,
            evaluator,
            predictor: RiskPredictor::new(),
            history: HistoryWindow::new(),
            clock,
        }
    }

    /// Produce the next record.
    ///
    /// The emission timestamp is read once and shared by the record and its
    /// history entry; alert timestamps and the maintenance date are separate
    /// clock reads.
    pub fn tick(&mut self) -> EmissionRecord {
        let snapshot = self.generator.generate();

        let alerts = self.evaluator.evaluate(&snapshot, &self.clock);
        let prediction = self.predictor.predict(&snapshot, self.clock.today());

        let timestamp = self.clock.time_of_day();
        self.history.append(HistoryEntry::from_snapshot(&snapshot, timestamp));

        debug!(
            tick = self.generator.readings_generated(),
            temperature = snapshot.temperature,
            pressure = snapshot.pressure,
            vibration = snapshot.vibration,
            cycle_count = snapshot.cycle_count,
            history_len = self.history.len(),
            "Composed record"
        );

        EmissionRecord::assemble(&snapshot, timestamp, alerts, prediction, self.history.to_vec())
    }

    pub fn history(&self) -> &HistoryWindow {
        &self.history
    }

    pub fn ticks(&self) -> u64 {
        self.generator.readings_generated()
    }
}

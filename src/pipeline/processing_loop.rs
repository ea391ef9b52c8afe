//! Fixed-cadence tick loop.
//!
//! Drives the [`RecordComposer`] once per interval and hands each record to
//! a [`TelemetrySink`]. Ticks never overlap: compose and send finish before
//! the next interval is awaited. A failed send is logged and counted, then
//! the loop carries on.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::RecordComposer;
use crate::clock::Clock;
use crate::transport::TelemetrySink;

/// Counters reported when the loop exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub ticks: u64,
    pub sent: u64,
    pub failed: u64,
    pub alerts: u64,
}

/// Owns everything needed to run the emission loop.
///
/// Built with [`new()`](ProcessingLoop::new), optionally bounded with
/// [`with_max_ticks()`](ProcessingLoop::with_max_ticks), then consumed by
/// [`run()`](ProcessingLoop::run).
pub struct ProcessingLoop<S: TelemetrySink, C: Clock> {
    composer: RecordComposer<C>,
    sink: S,
    interval: Duration,
    cancel_token: CancellationToken,
    max_ticks: Option<u64>,
}

impl<S: TelemetrySink, C: Clock> ProcessingLoop<S, C> {
    pub fn new(
        composer: RecordComposer<C>,
        sink: S,
        interval: Duration,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            composer,
            sink,
            interval,
            cancel_token,
            max_ticks: None,
        }
    }

    /// Stop after `max_ticks` records instead of running until cancelled.
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Run until cancellation or the tick limit.
    ///
    /// Returns the final statistics and the sink, so callers can inspect
    /// whatever the sink collected.
    pub async fn run(mut self) -> (LoopStats, S) {
        let mut stats = LoopStats::default();
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            sink = self.sink.sink_name(),
            interval_ms = self.interval.as_millis() as u64,
            "📡 Emitting telemetry records..."
        );

        loop {
            if self.max_ticks.is_some_and(|max| stats.ticks >= max) {
                info!(ticks = stats.ticks, "[TickLoop] Tick limit reached");
                break;
            }

            tokio::select! {
                biased;
                _ = self.cancel_token.cancelled() => {
                    info!("[TickLoop] Shutdown signal received");
                    break;
                }
                _ = interval.tick() => {}
            }

            let record = self.composer.tick();
            stats.ticks += 1;
            stats.alerts += record.alerts.len() as u64;

            if tracing::enabled!(tracing::Level::DEBUG) {
                match serde_json::to_string(&record) {
                    Ok(json) => debug!(record = %json, "Sending"),
                    Err(e) => debug!(error = %e, "Record not printable"),
                }
            }

            match self.sink.send(&record).await {
                Ok(()) => {
                    stats.sent += 1;
                    info!(
                        tick = stats.ticks,
                        status = %record.status,
                        alerts = record.alerts.len(),
                        risk = %record.prediction.risk_level,
                        failure_probability = record.prediction.failure_probability,
                        "Record sent"
                    );
                }
                Err(e) => {
                    stats.failed += 1;
                    warn!(tick = stats.ticks, sink = self.sink.sink_name(), error = %e, "Send failed, record dropped");
                }
            }
        }

        (stats, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::ReadingGenerator;
    use crate::clock::SystemClock;
    use crate::processing::AlertEvaluator;
    use crate::transport::TransportError;
    use crate::types::EmissionRecord;
    use async_trait::async_trait;

    #[derive(Default)]
    struct CollectingSink {
        records: Vec<EmissionRecord>,
    }

    #[async_trait]
    impl TelemetrySink for CollectingSink {
        async fn send(&mut self, record: &EmissionRecord) -> Result<(), TransportError> {
            self.records.push(record.clone());
            Ok(())
        }

        fn sink_name(&self) -> &str {
            "collect"
        }
    }

    /// Fails every other send.
    #[derive(Default)]
    struct FlakySink {
        attempts: u64,
    }

    #[async_trait]
    impl TelemetrySink for FlakySink {
        async fn send(&mut self, _record: &EmissionRecord) -> Result<(), TransportError> {
            self.attempts += 1;
            if self.attempts % 2 == 0 {
                Err(TransportError::ServerError(reqwest::StatusCode::BAD_GATEWAY))
            } else {
                Ok(())
            }
        }

        fn sink_name(&self) -> &str {
            "flaky"
        }
    }

    fn composer() -> RecordComposer<SystemClock> {
        RecordComposer::new(ReadingGenerator::new(Some(9)), AlertEvaluator::default())
    }

    #[tokio::test]
    async fn test_runs_to_tick_limit() {
        let (stats, sink) = ProcessingLoop::new(
            composer(),
            CollectingSink::default(),
            Duration::from_millis(1),
            CancellationToken::new(),
        )
        .with_max_ticks(25)
        .run()
        .await;

        assert_eq!(stats.ticks, 25);
        assert_eq!(stats.sent, 25);
        assert_eq!(stats.failed, 0);
        assert_eq!(sink.records.len(), 25);
        let alert_total: usize = sink.records.iter().map(|r| r.alerts.len()).sum();
        assert_eq!(stats.alerts, alert_total as u64);
        assert_eq!(sink.records[0].history.len(), 1);
        assert_eq!(sink.records[24].history.len(), 20);
    }

    #[tokio::test]
    async fn test_failed_sends_do_not_stop_the_loop() {
        let (stats, sink) = ProcessingLoop::new(
            composer(),
            FlakySink::default(),
            Duration::from_millis(1),
            CancellationToken::new(),
        )
        .with_max_ticks(10)
        .run()
        .await;

        assert_eq!(stats.ticks, 10);
        assert_eq!(stats.sent, 5);
        assert_eq!(stats.failed, 5);
        assert_eq!(sink.attempts, 10);
    }

    #[tokio::test]
    async fn test_cancelled_before_start_emits_nothing() {
        let token = CancellationToken::new();
        token.cancel();
        let (stats, sink) = ProcessingLoop::new(
            composer(),
            CollectingSink::default(),
            Duration::from_secs(3600),
            token,
        )
        .run()
        .await;

        assert_eq!(stats, LoopStats::default());
        assert!(sink.records.is_empty());
    }
}

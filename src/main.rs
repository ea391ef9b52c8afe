//! Machine Telemetry - simulated sensor stream for one molding machine
//!
//! Emits one JSON record per tick with the current readings, threshold
//! alerts, a failure-risk prediction and the last 20 readings.
//!
//! # Usage
//!
//! ```bash
//! # Print records to stdout (no endpoint configured)
//! cargo run --release
//!
//! # POST records to an HTTP endpoint every 3 seconds
//! ./machine-telemetry --endpoint https://example.com/prod/telemetry
//!
//! # Ten reproducible records, one per second
//! ./machine-telemetry --stdout --seed 42 --ticks 10 --interval-secs 1
//! ```
//!
//! # Environment Variables
//!
//! - `TELEMETRY_CONFIG`: Path to a TOML config file (default: ./telemetry.toml)
//! - `TELEMETRY_ENDPOINT`: HTTP endpoint, overrides the config file
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use machine_telemetry::clock::SystemClock;
use machine_telemetry::config::TelemetryConfig;
use machine_telemetry::pipeline::{ProcessingLoop, RecordComposer};
use machine_telemetry::processing::AlertEvaluator;
use machine_telemetry::transport::{HttpSink, StdoutSink, TelemetrySink};
use machine_telemetry::ReadingGenerator;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "machine-telemetry")]
#[command(about = "Simulated industrial machine telemetry emitter")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (overrides TELEMETRY_CONFIG and ./telemetry.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP endpoint receiving one JSON record per POST
    #[arg(short, long, env = "TELEMETRY_ENDPOINT")]
    endpoint: Option<String>,

    /// Seconds between records
    #[arg(short, long)]
    interval_secs: Option<u64>,

    /// Stop after this many records (default: run until Ctrl-C)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Random seed for reproducible readings
    #[arg(long)]
    seed: Option<u64>,

    /// Write records to stdout even if an endpoint is configured
    #[arg(long)]
    stdout: bool,
}

// ============================================================================
// Configuration
// ============================================================================

/// Resolve the effective config: file (explicit or searched) plus CLI overrides.
fn resolve_config(args: &CliArgs) -> Result<TelemetryConfig> {
    let mut config = match &args.config {
        Some(path) => TelemetryConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => TelemetryConfig::load(),
    };

    if let Some(endpoint) = &args.endpoint {
        config.transport.endpoint = Some(endpoint.clone());
    }
    if let Some(secs) = args.interval_secs {
        config.transport.interval_secs = secs;
    }

    config.validate().context("Invalid configuration after CLI overrides")?;
    Ok(config)
}

async fn drive<S: TelemetrySink>(
    composer: RecordComposer<SystemClock>,
    sink: S,
    interval: Duration,
    cancel_token: CancellationToken,
    max_ticks: Option<u64>,
) {
    let mut processing = ProcessingLoop::new(composer, sink, interval, cancel_token);
    if let Some(max) = max_ticks {
        processing = processing.with_max_ticks(max);
    }

    let (stats, _sink) = processing.run().await;

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!(
        ticks = stats.ticks,
        sent = stats.sent,
        failed = stats.failed,
        alerts = stats.alerts,
        "Telemetry stopped"
    );
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean JSON-lines stream
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let config = resolve_config(&args)?;

    let interval = Duration::from_secs(config.transport.interval_secs);
    let thresholds = config.thresholds;

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  MACHINE TELEMETRY");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!(machine = %config.machine.name, "Machine");
    info!(
        temperature_high_c = thresholds.temperature_high_c,
        pressure_high_bar = thresholds.pressure_high_bar,
        vibration_spike_g = thresholds.vibration_spike_g,
        "Alert thresholds"
    );
    info!(interval_secs = config.transport.interval_secs, ticks = ?args.ticks, seed = ?args.seed, "Cadence");

    let composer = RecordComposer::new(ReadingGenerator::new(args.seed), AlertEvaluator::new(thresholds));

    // Ctrl-C cancels between ticks
    let cancel_token = CancellationToken::new();
    {
        let token = cancel_token.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => token.cancel(),
                Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C"),
            }
        });
    }

    match config.transport.endpoint.as_deref() {
        Some(endpoint) if !args.stdout => {
            let sink = HttpSink::new(endpoint, Duration::from_secs(config.transport.timeout_secs))
                .context("Failed to build HTTP client")?;
            info!(endpoint = %endpoint, "Sink: HTTP");
            drive(composer, sink, interval, cancel_token, args.ticks).await;
        }
        _ => {
            info!("Sink: stdout (JSON lines)");
            drive(composer, StdoutSink::new(), interval, cancel_token, args.ticks).await;
        }
    }

    Ok(())
}

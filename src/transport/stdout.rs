//! Stdout sink — one compact JSON object per line
//!
//! Pipe into another tool: `machine-telemetry --stdout | jq .prediction`

use std::io::{self, Write};

use async_trait::async_trait;

use super::{TelemetrySink, TransportError};
use crate::types::EmissionRecord;

/// Writes JSON lines to any `Write`; stdout by default.
pub struct StdoutSink<W: Write + Send = io::Stdout> {
    out: W,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> StdoutSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait]
impl<W: Write + Send> TelemetrySink for StdoutSink<W> {
    async fn send(&mut self, record: &EmissionRecord) -> Result<(), TransportError> {
        let json = serde_json::to_string(record)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()?;
        Ok(())
    }

    fn sink_name(&self) -> &str {
        "stdout"
    }
}

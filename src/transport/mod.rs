//! Record transport
//!
//! Sinks take a finished [`EmissionRecord`] and deliver it somewhere. A
//! failed send is reported to the caller and nothing more: no retry, no
//! queue, and no effect on pipeline state.

mod http;
mod stdout;

pub use http::HttpSink;
pub use stdout::StdoutSink;

use async_trait::async_trait;

use crate::types::EmissionRecord;

/// Transport errors
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned status {0}")]
    ServerError(reqwest::StatusCode),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for emission records.
#[async_trait]
pub trait TelemetrySink: Send {
    /// Deliver one record. Called once per tick, never retried.
    async fn send(&mut self, record: &EmissionRecord) -> Result<(), TransportError>;

    /// Human-readable name for logging (e.g. "HTTP", "stdout").
    fn sink_name(&self) -> &str;
}

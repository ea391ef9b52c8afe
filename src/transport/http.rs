//! HTTP sink — POSTs each record as JSON

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use super::{TelemetrySink, TransportError};
use crate::config::defaults::RESPONSE_LOG_MAX_CHARS;
use crate::types::EmissionRecord;

#[derive(Clone)]
pub struct HttpSink {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSink {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TelemetrySink for HttpSink {
    async fn send(&mut self, record: &EmissionRecord) -> Result<(), TransportError> {
        let resp = self.http.post(&self.endpoint).json(record).send().await?;

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!(status = %status, error = %e, "Response body unreadable");
                String::new()
            }
        };
        let body: String = body.chars().take(RESPONSE_LOG_MAX_CHARS).collect();

        if status.is_success() {
            info!(status = %status, response = %body, "Record accepted");
            Ok(())
        } else {
            info!(status = %status, response = %body, "Record rejected");
            Err(TransportError::ServerError(status))
        }
    }

    fn sink_name(&self) -> &str {
        "HTTP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Prediction, RiskLevel, Snapshot};
    use chrono::{NaiveDate, NaiveTime};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn record() -> EmissionRecord {
        let snapshot = Snapshot::new(100.0, 50.0, 1.0, 12_000);
        let prediction = Prediction {
            failure_probability: 25.0,
            risk_level: RiskLevel::Low,
            maintenance_date: NaiveDate::from_ymd_opt(2026, 10, 30).expect("valid date"),
        };
        let timestamp = NaiveTime::from_hms_opt(8, 0, 0).expect("valid time");
        EmissionRecord::assemble(&snapshot, timestamp, Vec::new(), prediction, Vec::new())
    }

    /// Serve one request with `status_line`, returning the endpoint URL and
    /// a handle yielding the raw request text.
    async fn one_shot_server(
        status_line: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.expect("read");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    let content_length = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + content_length {
                        break;
                    }
                }
            }

            let body = "ack";
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write");
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}/telemetry"), handle)
    }

    #[tokio::test]
    async fn test_success_status_is_accepted() {
        let (endpoint, server) = one_shot_server("200 OK").await;
        let mut sink = HttpSink::new(&endpoint, Duration::from_secs(5)).expect("client");

        sink.send(&record()).await.expect("2xx is a success");

        let request = server.await.expect("server task");
        assert!(request.starts_with("POST /telemetry"));
        assert!(request.contains("\"cycleCount\":12000"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_server_error() {
        let (endpoint, server) = one_shot_server("503 Service Unavailable").await;
        let mut sink = HttpSink::new(&endpoint, Duration::from_secs(5)).expect("client");

        match sink.send(&record()).await {
            Err(TransportError::ServerError(status)) => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
            }
            other => panic!("expected server error, got {other:?}"),
        }
        server.await.expect("server task");
    }

    #[test]
    fn test_builds_with_endpoint() {
        let sink = HttpSink::new("http://127.0.0.1:9/telemetry", Duration::from_secs(1))
            .expect("client should build");
        assert_eq!(sink.endpoint(), "http://127.0.0.1:9/telemetry");
        assert_eq!(sink.sink_name(), "HTTP");
    }
}

//! Config Validation Tests
//!
//! Loads real TOML files from disk and checks defaults, overrides and
//! validation failures independently from the rest of the pipeline.

use std::io::Write;

use machine_telemetry::config::{ConfigError, TelemetryConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn full_config_file_loads() {
    let file = write_config(
        r#"
[machine]
name = "Press-3"

[thresholds]
temperature_high_c = 125.0
pressure_high_bar = 72.0
vibration_spike_g = 2.8

[transport]
endpoint = "https://telemetry.example.com/prod/telemetry"
timeout_secs = 5
interval_secs = 1
"#,
    );

    let config = TelemetryConfig::load_from_file(file.path()).expect("valid config");
    assert_eq!(config.machine.name, "Press-3");
    assert_eq!(config.thresholds.temperature_high_c, 125.0);
    assert_eq!(config.thresholds.vibration_spike_g, 2.8);
    assert_eq!(
        config.transport.endpoint.as_deref(),
        Some("https://telemetry.example.com/prod/telemetry")
    );
    assert_eq!(config.transport.timeout_secs, 5);
    assert_eq!(config.transport.interval_secs, 1);
}

#[test]
fn empty_file_yields_defaults() {
    let file = write_config("");
    let config = TelemetryConfig::load_from_file(file.path()).expect("empty config is valid");
    assert_eq!(config, TelemetryConfig::default());
}

#[test]
fn invalid_values_rejected_with_every_problem_listed() {
    let file = write_config(
        r#"
[thresholds]
pressure_high_bar = 0.0

[transport]
endpoint = "not a url"
interval_secs = 0
"#,
    );

    match TelemetryConfig::load_from_file(file.path()) {
        Err(ConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 3, "got {errors:?}");
            assert!(errors.iter().any(|e| e.contains("pressure_high_bar")));
            assert!(errors.iter().any(|e| e.contains("endpoint")));
            assert!(errors.iter().any(|e| e.contains("interval_secs")));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[thresholds\ntemperature_high_c = 1");
    let result = TelemetryConfig::load_from_file(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_, _))));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let file = write_config("[transport]\ninterval_secs = \"three\"\n");
    let result = TelemetryConfig::load_from_file(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_, _))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = TelemetryConfig::load_from_file(&dir.path().join("absent.toml"));
    match result {
        Err(e @ ConfigError::Io(_, _)) => assert!(e.to_string().contains("absent.toml")),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

//! Telemetry Configuration - alert thresholds and transport settings as TOML
//!
//! Each struct implements `Default` with values matching the built-in
//! constants in [`super::defaults`], so running without a config file
//! behaves exactly like the stock simulator.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TELEMETRY_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "telemetry.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one simulated machine.
///
/// Load with `TelemetryConfig::load()` which searches:
/// 1. `$TELEMETRY_CONFIG` env var
/// 2. `./telemetry.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Machine identification
    #[serde(default)]
    pub machine: MachineInfo,

    /// Alert thresholds
    #[serde(default)]
    pub thresholds: AlertThresholds,

    /// Upload target and cadence
    #[serde(default)]
    pub transport: TransportConfig,
}

impl TelemetryConfig {
    /// Load configuration using the standard search order:
    /// 1. `$TELEMETRY_CONFIG` environment variable
    /// 2. `./telemetry.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), machine = %config.machine.name, "Loaded telemetry config from TELEMETRY_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from TELEMETRY_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "TELEMETRY_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./telemetry.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(machine = %config.machine.name, "Loaded telemetry config from ./telemetry.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./telemetry.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No telemetry.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value and report all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        Self::check_positive(self.thresholds.temperature_high_c, "thresholds.temperature_high_c", &mut errors);
        Self::check_positive(self.thresholds.pressure_high_bar, "thresholds.pressure_high_bar", &mut errors);
        Self::check_positive(self.thresholds.vibration_spike_g, "thresholds.vibration_spike_g", &mut errors);

        if self.transport.interval_secs == 0 {
            errors.push("transport.interval_secs: must be at least 1".to_string());
        }
        if self.transport.timeout_secs == 0 {
            errors.push("transport.timeout_secs: must be at least 1".to_string());
        }

        if let Some(endpoint) = &self.transport.endpoint {
            match reqwest::Url::parse(endpoint) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => errors.push(format!(
                    "transport.endpoint: unsupported scheme '{}' (expected http or https)",
                    url.scheme()
                )),
                Err(e) => errors.push(format!("transport.endpoint: invalid URL '{endpoint}': {e}")),
            }
        }

        if self.machine.name.trim().is_empty() {
            errors.push("machine.name: must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_positive(value: f64, name: &str, errors: &mut Vec<String>) {
        // NaN comparisons silently pass — catch them explicitly
        if !value.is_finite() {
            errors.push(format!("{name}: value must be finite (got {value})"));
            return;
        }
        if value <= 0.0 {
            errors.push(format!("{name}: value must be > 0 (got {value:.3})"));
        }
    }
}

// ============================================================================
// Config Error
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Machine Info
// ============================================================================

/// Identification metadata — not used for logic, but appears in logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineInfo {
    #[serde(default = "default_machine_name")]
    pub name: String,
}

fn default_machine_name() -> String {
    defaults::MACHINE_NAME.to_string()
}

impl Default for MachineInfo {
    fn default() -> Self {
        Self {
            name: default_machine_name(),
        }
    }
}

// ============================================================================
// Alert Thresholds
// ============================================================================

/// Strict greater-than limits for the three alert checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Temperature High fires when temperature exceeds this (°C).
    #[serde(default = "default_temperature_high")]
    pub temperature_high_c: f64,

    /// Pressure High fires when pressure exceeds this (bar).
    #[serde(default = "default_pressure_high")]
    pub pressure_high_bar: f64,

    /// Vibration Spike fires when vibration exceeds this (g).
    #[serde(default = "default_vibration_spike")]
    pub vibration_spike_g: f64,
}

fn default_temperature_high() -> f64 {
    defaults::TEMPERATURE_HIGH_C
}
fn default_pressure_high() -> f64 {
    defaults::PRESSURE_HIGH_BAR
}
fn default_vibration_spike() -> f64 {
    defaults::VIBRATION_SPIKE_G
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            temperature_high_c: default_temperature_high(),
            pressure_high_bar: default_pressure_high(),
            vibration_spike_g: default_vibration_spike(),
        }
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Where records go and how often.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// HTTP endpoint receiving one JSON record per POST.
    /// When absent, records are written to stdout as JSON lines.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Emission cadence (seconds)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_timeout_secs() -> u64 {
    defaults::HTTP_TIMEOUT_SECS
}
fn default_interval_secs() -> u64 {
    defaults::TICK_INTERVAL_SECS
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
            interval_secs: default_interval_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = TelemetryConfig::default();
        assert!(config.validate().is_ok(), "Default config must always validate");
    }

    #[test]
    fn test_empty_toml_produces_defaults() {
        let config: TelemetryConfig = toml::from_str("").expect("empty TOML should parse");
        assert_eq!(config, TelemetryConfig::default());
        assert_eq!(config.thresholds.temperature_high_c, 120.0);
        assert_eq!(config.thresholds.pressure_high_bar, 70.0);
        assert_eq!(config.thresholds.vibration_spike_g, 2.5);
        assert_eq!(config.transport.interval_secs, 3);
        assert!(config.transport.endpoint.is_none());
    }

    #[test]
    fn test_partial_toml_override() {
        let toml_str = r#"
[machine]
name = "Press-7"

[thresholds]
pressure_high_bar = 75.0
"#;
        let config: TelemetryConfig = toml::from_str(toml_str).expect("partial TOML should parse");
        assert_eq!(config.machine.name, "Press-7");
        assert_eq!(config.thresholds.pressure_high_bar, 75.0);
        // Non-overridden values retain defaults
        assert_eq!(config.thresholds.temperature_high_c, 120.0);
        assert_eq!(config.transport.timeout_secs, 10);
    }

    #[test]
    fn test_validation_catches_zero_interval() {
        let mut config = TelemetryConfig::default();
        config.transport.interval_secs = 0;
        let result = config.validate();
        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("interval_secs")));
        } else {
            panic!("zero interval should fail validation");
        }
    }

    #[test]
    fn test_validation_catches_nan_threshold() {
        let mut config = TelemetryConfig::default();
        config.thresholds.vibration_spike_g = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = TelemetryConfig::default();
        config.thresholds.temperature_high_c = -1.0;
        config.transport.timeout_secs = 0;
        config.transport.endpoint = Some("ftp://example.com/upload".to_string());
        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_https_endpoint_accepted() {
        let mut config = TelemetryConfig::default();
        config.transport.endpoint = Some("https://telemetry.example.com/prod/telemetry".to_string());
        assert!(config.validate().is_ok());
    }
}

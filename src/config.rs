//! Logging configuration loading from environment variables.
//!
//! Only logging is configurable; the report itself takes no outside input.
//! Values come from `GVK_REPORT_*` environment variables with sensible
//! defaults. Invalid values fall back to defaults without crashing.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `GVK_REPORT_LOG_LEVEL` | warn | Log filter directive |
//! | `GVK_REPORT_LOG_FORMAT` | pretty | Log format on stderr (`pretty`, `json`) |

use crate::telemetry::{LogConfig, LogFormat};

pub const ENV_LOG_LEVEL: &str = "GVK_REPORT_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "GVK_REPORT_LOG_FORMAT";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// All configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log: LogConfig,
}

/// Read a non-empty env var.
fn read_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        _ => None,
    }
}

fn parse_log_format(s: &str) -> Option<LogFormat> {
    match s.trim().to_ascii_lowercase().as_str() {
        "json" => Some(LogFormat::Json),
        "pretty" => Some(LogFormat::Pretty),
        _ => None,
    }
}

/// Load logging configuration from environment.
fn load_log_config() -> LogConfig {
    let level = read_var(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let format = read_var(ENV_LOG_FORMAT)
        .and_then(|v| parse_log_format(&v))
        .unwrap_or(LogFormat::Pretty);
    LogConfig { format, level }
}

/// Load all configuration from environment variables.
///
/// Missing or invalid values fall back to defaults without panicking.
pub fn load() -> EnvConfig {
    EnvConfig {
        log: load_log_config(),
    }
}

impl EnvConfig {
    /// Effective values as `KEY=value` lines, in table order.
    pub fn effective_lines(&self) -> Vec<String> {
        let log_format = match self.log.format {
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
        };
        vec![
            format!("{}={}", ENV_LOG_LEVEL, self.log.level),
            format!("{}={}", ENV_LOG_FORMAT, log_format),
        ]
    }
}

//! Telemetry for the GVK reporter.
//!
//! Structured logging only. Logs go to stderr, never stdout.

mod logging;

pub use logging::{init_logging, LogConfig, LogError, LogFormat};

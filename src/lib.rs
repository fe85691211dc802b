//! GVK report
//!
//! Flattens the embedded per-rule lists of Kubernetes Group/Version/Kind
//! identifiers, removes duplicates, and reports the sorted result with its
//! count.
//!
//! # Boundaries
//!
//! - Input: compile-time data only. No cluster access, no file reads.
//! - Output: the report on stdout. Logs on stderr only. No files written.
//! - GVKs are opaque strings; no parsing or validation.

pub mod config;
pub mod gvks;
pub mod telemetry;

pub use gvks::{GvkReport, OutputFormat, ReportError, UniqueGvks, GVK_LISTS};

// Copyright 2024-2026 GG-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! Rendering of the unique GVK report.
//!
//! Text output is byte-exact. The header line is `"Unique gvks: "` with a
//! trailing space, and every line, the count line included, ends in `\n`:
//!
//! ```text
//! Unique gvks:␠
//! <gvk 1>
//! ...
//! <gvk N>
//! Unique gvks count: <N>
//! ```

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use super::unique::UniqueGvks;

/// Output format of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Header, one GVK per line, count line.
    #[default]
    Text,
    /// `{ "gvks": [...], "count": N }`.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Errors raised while emitting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Sorted unique GVKs and their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GvkReport<'a> {
    pub gvks: Vec<&'a str>,
    pub count: usize,
}

impl<'a> GvkReport<'a> {
    pub fn from_unique(unique: &UniqueGvks<'a>) -> Self {
        let gvks = unique.sorted();
        let count = gvks.len();
        Self { gvks, count }
    }

    /// Render the text report, trailing newline included.
    pub fn render_text(&self) -> String {
        format!(
            "Unique gvks: \n{}\nUnique gvks count: {}\n",
            self.gvks.join("\n"),
            self.count
        )
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        out.write_all(self.render_text().as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Encoded in full before writing, so I/O failures surface as `Write`.
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let mut encoded = serde_json::to_vec_pretty(self)?;
        encoded.push(b'\n');
        out.write_all(&encoded)?;
        out.flush()?;
        Ok(())
    }

    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<(), ReportError> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => self.write_json(out),
        }
    }
}

impl GvkReport<'static> {
    /// Report over the embedded dataset.
    pub fn embedded() -> Self {
        Self::from_unique(&UniqueGvks::embedded())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

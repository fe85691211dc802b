// Copyright 2024-2026 GG-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! GVK dataset, deduplication and reporting.
//!
//! GVK identifiers are opaque `<group>/<version>/<kind>` strings; nothing
//! here parses them.

pub mod dataset;
pub mod report;
pub mod unique;

pub use dataset::{total_entries, GVK_LISTS};
pub use report::{GvkReport, OutputFormat, ReportError};
pub use unique::UniqueGvks;

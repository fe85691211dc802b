// Copyright 2024-2026 GG-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! Flattening and deduplication of GVK lists.

use std::collections::HashSet;

use super::dataset::GVK_LISTS;

/// Set of distinct GVK identifiers drawn from one or more lists.
///
/// Identifiers are compared as plain strings. Borrowed from the input, so
/// the source lists are never copied or mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueGvks<'a> {
    gvks: HashSet<&'a str>,
}

impl<'a> UniqueGvks<'a> {
    /// Flatten `lists` in a single pass and keep each identifier once.
    pub fn from_lists<I, L>(lists: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = &'a str>,
    {
        let gvks = lists.into_iter().flatten().collect();
        Self { gvks }
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.gvks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gvks.is_empty()
    }

    pub fn contains(&self, gvk: &str) -> bool {
        self.gvks.contains(gvk)
    }

    /// Identifiers in ascending byte-wise order.
    pub fn sorted(&self) -> Vec<&'a str> {
        let mut sorted: Vec<&'a str> = self.gvks.iter().copied().collect();
        sorted.sort_unstable();
        sorted
    }

    /// How many entries of a `total`-sized input were dropped as duplicates.
    pub fn duplicates_removed(&self, total: usize) -> usize {
        total.saturating_sub(self.len())
    }
}

impl UniqueGvks<'static> {
    /// Unique set of the embedded dataset.
    pub fn embedded() -> Self {
        Self::from_lists(GVK_LISTS.iter().map(|list| list.iter().copied()))
    }
}

#[cfg(test)]
#[path = "unique_tests.rs"]
mod tests;

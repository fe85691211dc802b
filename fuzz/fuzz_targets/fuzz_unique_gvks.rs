//! Fuzz target for GVK deduplication.
//!
//! Arbitrary nested string lists must produce a strictly ascending,
//! complete and sound unique list whose rendered count matches.

#![no_main]

use gvk_report::{GvkReport, UniqueGvks};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|lists: Vec<Vec<String>>| {
    let unique = UniqueGvks::from_lists(lists.iter().map(|l| l.iter().map(String::as_str)));
    let sorted = unique.sorted();

    assert!(sorted.windows(2).all(|w| w[0] < w[1]));
    for gvk in lists.iter().flatten() {
        assert!(unique.contains(gvk));
    }
    for gvk in &sorted {
        assert!(lists.iter().flatten().any(|g| g == gvk));
    }

    let report = GvkReport::from_unique(&unique);
    assert_eq!(report.count, sorted.len());
    assert!(report
        .render_text()
        .ends_with(&format!("Unique gvks count: {}\n", sorted.len())));
});

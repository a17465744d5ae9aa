// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary bytes go straight into the query parser and engine over the
//! bundled sample blog. The engine must never panic, must respect the limit,
//! and every span it reports must point inside its field value.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scour::testing::sample_posts;
use scour::{build_index, search, SearchIndex, SearchOptions};

fuzz_target!(|query: &[u8]| {
    static INDEX: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(|| build_index(&sample_posts(), &SearchOptions::default()));

    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeout
    let query: String = query.chars().take(64).collect();

    let results = search(index, &query, 5);
    assert!(results.len() <= 5);

    for pair in results.windows(2) {
        assert!(pair[0].score <= pair[1].score, "results out of order");
    }

    for result in &results {
        assert!(result.score.is_finite() && result.score >= 0.0);
        for span in &result.matches {
            let len = span.value.chars().count();
            for &(start, end) in &span.indices {
                assert!(start <= end && end < len, "span {:?} outside {:?}", (start, end), span.value);
            }
        }
    }
});

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for approximate substring matching.
//!
//! Scores must stay within the threshold, indices must be ascending, disjoint
//! and inside the text, and a pattern identical to the text must score 0.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scour::fuzzy::{fuzzy_match, MatchParams};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let pattern: Vec<char> = input.pattern.chars().take(32).collect();
    let text: Vec<char> = input.text.chars().take(200).collect();
    let params = MatchParams::default();

    if let Some(m) = fuzzy_match(&pattern, &text, &params) {
        assert!(m.score >= 0.0 && m.score <= params.threshold);
        let mut last_end: Option<usize> = None;
        for &(start, end) in &m.indices {
            assert!(start <= end && end < text.len());
            if let Some(prev) = last_end {
                assert!(start > prev);
            }
            last_end = Some(end);
        }
    }

    if !text.is_empty() {
        let identical = fuzzy_match(&text, &text, &params);
        assert_eq!(identical.map(|m| m.score), Some(0.0));
    }
});

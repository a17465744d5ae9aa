// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the highlighter.
//!
//! Any text with any ranges, including inverted and out-of-bounds ones, must
//! come back as segments that rebuild the text exactly and alternate between
//! plain and emphasized.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scour::{highlight_ranges, render};

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    ranges: Vec<(u16, u16)>,
}

fuzz_target!(|input: HighlightInput| {
    let ranges: Vec<(usize, usize)> = input
        .ranges
        .iter()
        .map(|&(s, e)| (s as usize, e as usize))
        .collect();

    let segments = highlight_ranges(&input.text, &ranges);
    assert_eq!(render(&segments, "", ""), input.text);

    if !input.text.is_empty() {
        for pair in segments.windows(2) {
            assert_ne!(pair[0].is_emphasized(), pair[1].is_emphasized());
        }
    }
});

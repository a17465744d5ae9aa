// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning match spans into alternating plain and emphasized text.
//!
//! Several spans can touch the same field: two query tokens that hit
//! neighbouring words, or an include token that hits the same place as a fuzzy
//! one. The reconciler flattens every range of every span, sorts by start and
//! merges before cutting the text, so no character is emphasized twice and
//! none goes missing.
//!
//! # Boundary convention
//!
//! Range ends are **inclusive** character offsets, the same convention the
//! matchers produce. Two ranges merge when the next one starts at or before
//! `end + 1`, i.e. when they overlap *or touch*:
//!
//! ```text
//! "abcdef"  [0,2] + [3,5]  →  «abcdef»
//! "abcdef"  [0,1] + [4,5]  →  «ab» cd «ef»
//! ```
//!
//! A gap of a single character keeps two ranges apart.
//!
//! Ranges are clamped to the text. A range that starts past the end, or whose
//! start exceeds its end, is ignored rather than trusted.

use serde::{Deserialize, Serialize};

use crate::types::MatchSpan;

/// A piece of a highlighted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Emphasized(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Emphasized(text) => text,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, Segment::Emphasized(_))
    }
}

/// Highlight `text` with every range of every span.
///
/// Pass only the spans for the field being rendered; spans of other fields
/// point into other strings.
pub fn highlight(text: &str, spans: &[MatchSpan]) -> Vec<Segment> {
    let ranges: Vec<(usize, usize)> = spans
        .iter()
        .flat_map(|span| span.indices.iter().copied())
        .collect();
    highlight_ranges(text, &ranges)
}

/// Highlight `text` with raw inclusive character ranges.
pub fn highlight_ranges(text: &str, ranges: &[(usize, usize)]) -> Vec<Segment> {
    if text.is_empty() || ranges.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    // Byte offset of every character, plus one past the end
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .collect();
    let len = bounds.len() - 1;

    let merged = merge_ranges(ranges.iter().copied(), len);
    if merged.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    let mut segments = Vec::with_capacity(merged.len() * 2 + 1);
    let mut last = 0;
    for (start, end) in merged {
        if start > last {
            segments.push(Segment::Plain(text[bounds[last]..bounds[start]].to_string()));
        }
        segments.push(Segment::Emphasized(
            text[bounds[start]..bounds[end + 1]].to_string(),
        ));
        last = end + 1;
    }
    if last < len {
        segments.push(Segment::Plain(text[bounds[last]..].to_string()));
    }
    segments
}

/// Sort, clamp to `len` characters, and merge overlapping or touching ranges.
pub fn merge_ranges(
    ranges: impl IntoIterator<Item = (usize, usize)>,
    len: usize,
) -> Vec<(usize, usize)> {
    if len == 0 {
        return Vec::new();
    }

    let mut sorted: Vec<(usize, usize)> = ranges
        .into_iter()
        .filter(|&(start, end)| start <= end && start < len)
        .map(|(start, end)| (start, end.min(len - 1)))
        .collect();
    sorted.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(sorted.len());
    for (start, end) in sorted {
        match merged.last_mut() {
            Some(prev) if start <= prev.1.saturating_add(1) => {
                prev.1 = prev.1.max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Join segments back into one string, wrapping emphasized ones.
///
/// `render(&segs, "<mark>", "</mark>")` for HTML, ANSI codes for a terminal,
/// or empty markers to get the original text back.
pub fn render(segments: &[Segment], open: &str, close: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Plain(text) => out.push_str(text),
            Segment::Emphasized(text) => {
                out.push_str(open);
                out.push_str(text);
                out.push_str(close);
            }
        }
    }
    out
}

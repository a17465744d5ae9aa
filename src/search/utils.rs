// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for presenting search results.
//!
//! The boring-but-essential helpers every result list needs: dropping weak
//! matches and cutting a long excerpt down to the part that matched.

use crate::types::{MatchSpan, SearchResult};

/// Default cut-off for [`filter_by_score`].
pub const DEFAULT_SCORE_CUTOFF: f64 = 0.5;

/// Default characters of context either side of a match.
pub const DEFAULT_EXCERPT_CONTEXT: usize = 100;

/// Keep results scoring strictly below `threshold`.
pub fn filter_by_score(results: Vec<SearchResult>, threshold: f64) -> Vec<SearchResult> {
    results.into_iter().filter(|r| r.score < threshold).collect()
}

/// Window of `context` characters either side of the first match start.
///
/// `...` marks each side that was cut. Without spans the text comes back
/// unchanged.
pub fn format_excerpt(text: &str, spans: &[MatchSpan], context: usize) -> String {
    let Some(&(first, _)) = spans.first().and_then(|s| s.indices.first()) else {
        return text.to_string();
    };
    if text.is_empty() {
        return String::new();
    }

    let len = text.chars().count();
    let start = first.saturating_sub(context);
    let end = first.saturating_add(context).min(len);
    if start >= end {
        return text.to_string();
    }

    let mut excerpt: String = text.chars().skip(start).take(end - start).collect();
    if start > 0 {
        excerpt.insert_str(0, "...");
    }
    if end < len {
        excerpt.push_str("...");
    }
    excerpt
}

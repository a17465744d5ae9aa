// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine.
//!
//! Two length gates apply, and they are different on purpose:
//!
//! - a trimmed query shorter than `min_query_len` (2) returns nothing without
//!   looking at the index at all
//! - a fuzzy field hit only counts if it highlights a run of at least
//!   `min_match_char_length` (3) characters
//!
//! So "go" passes the first gate but only matches a value that *is* "go".
//!
//! A plain-text query (no operators) that matches nothing token by token is
//! retried once as a single fuzzy pattern, so pasting a title made of short
//! words ("Go or C") still finds the post.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fuzzy::MatchParams;
use crate::index::{IndexedRecord, SearchIndex};
use crate::query::{match_value, ParsedQuery};
use crate::types::{MatchSpan, SearchResult};

use super::ranking::{compare_scored, record_score, ScoredRecord, ValueHit};

/// Rank the index's records against `query`, best first, at most `limit`.
///
/// Pure: no state is touched, so this is safe to call on every keystroke.
pub fn search(index: &SearchIndex, query: &str, limit: usize) -> Vec<SearchResult> {
    let options = index.options();
    let trimmed = query.trim();
    if trimmed.chars().count() < options.min_query_len || limit == 0 {
        return Vec::new();
    }

    let parsed = parse(index, trimmed);
    if parsed.is_empty() || index.is_empty() {
        return Vec::new();
    }
    let params = match_params(index);

    let mut scored = rank(index, &parsed, &params);
    if scored.is_empty()
        && options.use_extended_search
        && parsed.is_plain()
        && trimmed.contains(char::is_whitespace)
    {
        let whole = ParsedQuery::fuzzy(trimmed, options.ignore_diacritics);
        scored = rank(index, &whole, &params);
    }

    scored.sort_by(compare_scored);
    scored.truncate(limit);

    tracing::trace!(query = trimmed, hits = scored.len(), "search");

    scored
        .into_iter()
        .map(|s| SearchResult {
            record: index.records()[s.record].clone(),
            matches: s.matches,
            score: s.score,
        })
        .collect()
}

/// [`search`] with the index's configured default limit.
pub fn search_default(index: &SearchIndex, query: &str) -> Vec<SearchResult> {
    search(index, query, index.options().limit)
}

fn rank(index: &SearchIndex, parsed: &ParsedQuery, params: &MatchParams) -> Vec<ScoredRecord> {
    #[cfg(feature = "parallel")]
    let scored: Vec<ScoredRecord> = index
        .entries()
        .par_iter()
        .filter_map(|entry| score_entry(index, entry, parsed, params))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let scored: Vec<ScoredRecord> = index
        .entries()
        .iter()
        .filter_map(|entry| score_entry(index, entry, parsed, params))
        .collect();

    scored
}

fn parse(index: &SearchIndex, query: &str) -> ParsedQuery {
    let options = index.options();
    if options.use_extended_search {
        ParsedQuery::extended(query, options.ignore_diacritics)
    } else {
        ParsedQuery::fuzzy(query, options.ignore_diacritics)
    }
}

fn match_params(index: &SearchIndex) -> MatchParams {
    let options = index.options();
    MatchParams {
        threshold: options.threshold,
        min_match_char_length: options.min_match_char_length,
        ignore_location: options.ignore_location,
        location: options.location,
        distance: options.distance,
    }
}

fn score_entry(
    index: &SearchIndex,
    entry: &IndexedRecord,
    parsed: &ParsedQuery,
    params: &MatchParams,
) -> Option<ScoredRecord> {
    let ignore_norm = index.options().ignore_field_norm;
    let mut hits: Vec<ValueHit> = Vec::new();
    let mut matches: Vec<MatchSpan> = Vec::new();

    for value in &entry.values {
        let Some(hit) = match_value(parsed, &value.folded, params) else {
            continue;
        };
        let key = index.keys()[value.key];
        hits.push(ValueHit {
            score: hit.score,
            weight: key.weight,
            norm: if ignore_norm { 1.0 } else { value.norm },
        });
        matches.push(MatchSpan {
            key: key.key,
            value: value.text.clone(),
            indices: hit.indices,
        });
    }

    if hits.is_empty() {
        return None;
    }
    Some(ScoredRecord {
        record: entry.record,
        score: record_score(&hits),
        matches,
    })
}

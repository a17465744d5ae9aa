// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matching one folded field value against a parsed query.
//!
//! Within a group every token must match the same value (AND). The value's
//! score is the mean of the counted token scores and its spans are the union
//! of theirs. The first group that matches wins (OR). Exact-style operators
//! score 0; fuzzy tokens defer to [`fuzzy_match`].
//!
//! A fuzzy token shorter than `min_match_char_length` can only hit a value
//! that is exactly that token, so in a group with longer tokens it is
//! optional: "a", "of" or "10" in a title-like query count when they hit and
//! are skipped when they miss. A group made only of short tokens stays strict.

use crate::fuzzy::{fuzzy_match, MatchParams};

use super::parse::{Operator, ParsedQuery, Token};

/// How well one field value matched.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueMatch {
    pub score: f64,
    /// Inclusive character ranges, sorted by start.
    pub indices: Vec<(usize, usize)>,
}

/// Match a whole parsed query against one folded value.
pub fn match_value(query: &ParsedQuery, text: &[char], params: &MatchParams) -> Option<ValueMatch> {
    if text.is_empty() {
        return None;
    }

    'groups: for group in &query.groups {
        let strict = group.iter().all(|t| is_short(t, params));
        let mut total = 0.0;
        let mut counted = 0usize;
        let mut indices: Vec<(usize, usize)> = Vec::new();

        for token in group {
            match match_token(token, text, params) {
                Some(hit) => {
                    total += hit.score;
                    counted += 1;
                    indices.extend(hit.indices);
                }
                None if !strict && is_short(token, params) => {}
                None => continue 'groups,
            }
        }

        indices.sort_unstable();
        indices.dedup();
        return Some(ValueMatch {
            score: total / counted as f64,
            indices,
        });
    }
    None
}

/// A fuzzy token too short to ever produce a qualifying run on its own.
fn is_short(token: &Token, params: &MatchParams) -> bool {
    token.op == Operator::Fuzzy && token.pattern.len() < params.min_match_char_length
}

/// Match a single token against one folded value.
pub fn match_token(token: &Token, text: &[char], params: &MatchParams) -> Option<ValueMatch> {
    let pattern = token.pattern.as_slice();
    let n = text.len();
    if n == 0 || pattern.is_empty() {
        return None;
    }
    let whole = || vec![(0, n - 1)];

    let indices = match token.op {
        Operator::Fuzzy => {
            let hit = fuzzy_match(pattern, text, params)?;
            return Some(ValueMatch {
                score: hit.score,
                indices: hit.indices,
            });
        }
        Operator::Exact => (text == pattern).then(whole)?,
        Operator::Include => {
            let found = find_all(text, pattern);
            (!found.is_empty()).then_some(found)?
        }
        Operator::InverseInclude => find_all(text, pattern).is_empty().then(whole)?,
        Operator::Prefix => text
            .starts_with(pattern)
            .then(|| vec![(0, pattern.len() - 1)])?,
        Operator::InversePrefix => (!text.starts_with(pattern)).then(whole)?,
        Operator::Suffix => text
            .ends_with(pattern)
            .then(|| vec![(n - pattern.len(), n - 1)])?,
        Operator::InverseSuffix => (!text.ends_with(pattern)).then(whole)?,
    };

    Some(ValueMatch {
        score: 0.0,
        indices,
    })
}

/// Every non-overlapping occurrence of `pattern`, left to right.
fn find_all(text: &[char], pattern: &[char]) -> Vec<(usize, usize)> {
    let m = pattern.len();
    let mut found = Vec::new();
    let mut from = 0;
    while from + m <= text.len() {
        if text[from..from + m] == *pattern {
            found.push((from, from + m - 1));
            from += m;
        } else {
            from += 1;
        }
    }
    found
}

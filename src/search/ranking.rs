// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how records get their numbers.
//!
//! Every matched value contributes `score ^ (weight * norm)` and the record's
//! score is the product. All factors are in `[0, 1]`, so:
//!
//! - more matched values can only lower (improve) the score
//! - a heavier key raises the exponent, pulling a good hit further towards 0
//! - a perfect hit (0) is replaced by `f64::EPSILON` so it still ranks by key
//!
//! Sort order is score ascending, then index order, which makes ranking fully
//! deterministic.

use std::cmp::Ordering;

use crate::types::MatchSpan;

/// One matched value's contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueHit {
    pub score: f64,
    /// Normalised key weight.
    pub weight: f64,
    pub norm: f64,
}

/// A record that matched, before it is turned into a `SearchResult`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub record: usize,
    pub score: f64,
    pub matches: Vec<MatchSpan>,
}

/// Combine value hits into one record score. Lower is better.
pub fn record_score(hits: &[ValueHit]) -> f64 {
    hits.iter().fold(1.0, |total, hit| {
        let base = if hit.score == 0.0 {
            f64::EPSILON
        } else {
            hit.score
        };
        total * base.powf(hit.weight * hit.norm)
    })
}

/// Score ascending, then record position for equal scores.
pub fn compare_scored(a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    a.score
        .partial_cmp(&b.score)
        .unwrap_or(Ordering::Equal)
        .then(a.record.cmp(&b.record))
}

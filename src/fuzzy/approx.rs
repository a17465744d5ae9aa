// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching with alignment spans.
//!
//! Classic edit-distance DP with one twist: row 0 is all zeros, so a match may
//! begin at any text position without paying for the skipped prefix (Sellers'
//! algorithm). `d[m][j]` is then the fewest edits turning the pattern into some
//! substring of the text ending at `j`.
//!
//! The score of a match is `errors / pattern_len`, so a one-letter typo in a
//! ten-letter word scores 0.1 and a perfect hit scores 0. When location
//! matters, drift from the expected position is added on top.
//!
//! Spans come from the traceback: text positions aligned to an equal pattern
//! character, grouped into runs. Runs shorter than `min_match_char_length` are
//! dropped, and a match with no surviving run is not a match at all. This is
//! what stops "ab" from lighting up every word containing an "a".
//!
//! Everything works on folded `char` slices, so offsets are character offsets
//! and both span ends are inclusive.

/// Floor for a successful fuzzy score. Only an identical value scores 0.
pub const MIN_FUZZY_SCORE: f64 = 0.001;

/// Knobs for one fuzzy comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchParams {
    pub threshold: f64,
    pub min_match_char_length: usize,
    pub ignore_location: bool,
    pub location: usize,
    pub distance: usize,
}

impl Default for MatchParams {
    fn default() -> Self {
        MatchParams {
            threshold: 0.3,
            min_match_char_length: 3,
            ignore_location: true,
            location: 0,
            distance: 100,
        }
    }
}

/// A successful fuzzy match.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    /// 0.0 for an identical value, otherwise in `[MIN_FUZZY_SCORE, threshold]`.
    pub score: f64,
    /// Inclusive character ranges, ascending and disjoint.
    pub indices: Vec<(usize, usize)>,
}

/// Most edits a pattern of `len` characters may need and still pass `threshold`.
#[inline]
pub fn max_errors(len: usize, threshold: f64) -> usize {
    (threshold * len as f64).floor() as usize
}

/// Find the best approximate occurrence of `pattern` in `text`.
///
/// Both slices must already be folded. Returns `None` when nothing scores
/// within the threshold or no aligned run is long enough.
pub fn fuzzy_match(pattern: &[char], text: &[char], params: &MatchParams) -> Option<FuzzyMatch> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 || n == 0 {
        return None;
    }

    if pattern == text {
        return Some(FuzzyMatch {
            score: 0.0,
            indices: vec![(0, n - 1)],
        });
    }

    let max_k = max_errors(m, params.threshold);

    // Early-exit: at least `m - n` pattern characters have nowhere to go
    if m > n && m - n > max_k {
        return None;
    }

    let d = distance_table(pattern, text);
    let at = |i: usize, j: usize| d[i * (n + 1) + j];

    let mut best: Option<(f64, Alignment)> = None;
    for j in 1..=n {
        let errors = at(m, j) as usize;
        if errors > max_k {
            continue;
        }

        let alignment = traceback(pattern, text, &d, j);
        let score = compute_score(errors, m, alignment.start, params);
        if score > params.threshold {
            continue;
        }

        // Strict `<` keeps the earliest end position on ties
        if best.as_ref().is_none_or(|(s, _)| score < *s) {
            best = Some((score, alignment));
        }
    }

    let (score, alignment) = best?;
    let indices = runs(&alignment.matched, params.min_match_char_length);
    if indices.is_empty() {
        return None;
    }

    Some(FuzzyMatch {
        score: score.max(MIN_FUZZY_SCORE),
        indices,
    })
}

/// Score a match with `errors` edits for a pattern of `len` characters that
/// starts at `start`.
pub fn compute_score(errors: usize, len: usize, start: usize, params: &MatchParams) -> f64 {
    let accuracy = errors as f64 / len as f64;
    if params.ignore_location {
        return accuracy;
    }

    let proximity = params.location.abs_diff(start);
    if params.distance == 0 {
        return if proximity > 0 { 1.0 } else { accuracy };
    }
    accuracy + proximity as f64 / params.distance as f64
}

/// Row-major `(m + 1) x (n + 1)` table of substring edit distances.
fn distance_table(pattern: &[char], text: &[char]) -> Vec<u32> {
    let m = pattern.len();
    let n = text.len();
    let width = n + 1;
    let mut d = vec![0u32; (m + 1) * width];

    for i in 1..=m {
        d[i * width] = i as u32;
        for j in 1..=n {
            let cost = u32::from(pattern[i - 1] != text[j - 1]);
            let diag = d[(i - 1) * width + (j - 1)] + cost;
            let up = d[(i - 1) * width + j] + 1;
            let left = d[i * width + (j - 1)] + 1;
            d[i * width + j] = diag.min(up).min(left);
        }
    }
    d
}

struct Alignment {
    /// First text position covered by the match.
    start: usize,
    /// Text positions aligned to an identical pattern character, ascending.
    matched: Vec<usize>,
}

/// Walk back from `(m, end)` to row 0, preferring diagonal moves.
fn traceback(pattern: &[char], text: &[char], d: &[u32], end: usize) -> Alignment {
    let width = text.len() + 1;
    let at = |i: usize, j: usize| d[i * width + j];

    let mut i = pattern.len();
    let mut j = end;
    let mut matched = Vec::with_capacity(i);

    while i > 0 {
        let here = at(i, j);
        if j > 0 {
            let equal = pattern[i - 1] == text[j - 1];
            let cost = u32::from(!equal);
            if here == at(i - 1, j - 1) + cost {
                if equal {
                    matched.push(j - 1);
                }
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if here == at(i - 1, j) + 1 {
            // Pattern character with no counterpart in the text
            i -= 1;
        } else {
            // Extra text character inside the match
            j -= 1;
        }
    }

    matched.reverse();
    Alignment { start: j, matched }
}

/// Group ascending positions into inclusive runs of at least `min_len`.
fn runs(positions: &[usize], min_len: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut iter = positions.iter().copied();
    let Some(first) = iter.next() else {
        return out;
    };

    let (mut start, mut end) = (first, first);
    for p in iter {
        if p == end + 1 {
            end = p;
            continue;
        }
        if end - start + 1 >= min_len {
            out.push((start, end));
        }
        start = p;
        end = p;
    }
    if end - start + 1 >= min_len {
        out.push((start, end));
    }
    out
}

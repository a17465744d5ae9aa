// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character folding that never moves an offset.
//!
//! Match spans point into the *original* field text, so folding must map every
//! input character to exactly one output character. That rules out the usual
//! `to_lowercase()` on the whole string ("İ" lowercases to two characters) and
//! NFD-then-filter (a precomposed "é" stays one character, a decomposed one is
//! two). Instead each character folds on its own:
//!
//! - lowercase, keeping the first character of the lowercase expansion
//! - optionally, NFD decompose and keep the base character ("é" → "e")
//!
//! `fold("Café", true).len() == "Café".chars().count()` always holds.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold a single character.
#[inline]
pub fn fold_char(c: char, ignore_diacritics: bool) -> char {
    let c = if ignore_diacritics { strip_diacritic(c) } else { c };
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}

/// Fold a string into a character vector, one output char per input char.
pub fn fold(text: &str, ignore_diacritics: bool) -> Vec<char> {
    text.chars().map(|c| fold_char(c, ignore_diacritics)).collect()
}

#[cfg(feature = "unicode-normalization")]
fn strip_diacritic(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    c.nfd().next().unwrap_or(c)
}

/// Without unicode-normalization the text is matched as-is.
#[cfg(not(feature = "unicode-normalization"))]
fn strip_diacritic(c: char) -> char {
    c
}

/// Number of space-separated tokens (runs of non-space characters).
pub fn token_count(text: &str) -> usize {
    text.split(' ').filter(|t| !t.is_empty()).count()
}

/// Field-length norm: `1 / sqrt(tokens)`, rounded to three decimals.
///
/// A hit in a two-word title outweighs the same hit in a forty-word excerpt.
/// Zero tokens (blank values are never indexed) returns 1.0.
pub fn field_norm(tokens: usize) -> f64 {
    if tokens == 0 {
        return 1.0;
    }
    ((1.0 / (tokens as f64).sqrt()) * 1000.0).round() / 1000.0
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search and session configuration.
//!
//! These are fixed settings, not runtime state. Every field has a default, so
//! a config file only needs the values it changes:
//!
//! ```json
//! { "search": { "threshold": 0.4 }, "session": { "debounceMs": 150 } }
//! ```
//!
//! # Default weights
//!
//! | Key        | Weight | Why this value |
//! |------------|--------|----------------|
//! | title      | 2.5    | A title hit is the strongest signal |
//! | tags       | 2.0    | Curated, short, high precision |
//! | categories | 2.0    | Same as tags |
//! | excerpt    | 1.5    | Long prose, more accidental hits |
//! | slug       | 1.0    | Mostly duplicates the title |

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::FieldKey;

/// Relative importance of one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyWeight {
    pub key: FieldKey,
    pub weight: f64,
}

impl KeyWeight {
    pub fn new(key: FieldKey, weight: f64) -> Self {
        KeyWeight { key, weight }
    }
}

/// Matching and ranking parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub keys: Vec<KeyWeight>,
    /// Highest fuzzy score still accepted. 0.0 demands a perfect match.
    pub threshold: f64,
    /// Trimmed queries shorter than this never reach the index.
    pub min_query_len: usize,
    /// Shortest highlighted run for a fuzzy field match to count.
    pub min_match_char_length: usize,
    /// When true, where in the field a match lands does not affect its score.
    pub ignore_location: bool,
    /// Expected match position, only used when `ignore_location` is false.
    pub location: usize,
    /// How far from `location` a match may drift before it scores 1.0.
    pub distance: usize,
    /// Enable `=exact`, `'include`, `^prefix`, `suffix$`, `!not` and `|`.
    pub use_extended_search: bool,
    /// Skip the field-length norm (short fields otherwise win ties).
    pub ignore_field_norm: bool,
    /// Fold accented letters to their base letter before matching.
    pub ignore_diacritics: bool,
    /// Default result cap.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            keys: vec![
                KeyWeight::new(FieldKey::Title, 2.5),
                KeyWeight::new(FieldKey::Excerpt, 1.5),
                KeyWeight::new(FieldKey::Tags, 2.0),
                KeyWeight::new(FieldKey::Categories, 2.0),
                KeyWeight::new(FieldKey::Slug, 1.0),
            ],
            threshold: 0.3,
            min_query_len: 2,
            min_match_char_length: 3,
            ignore_location: true,
            location: 0,
            distance: 100,
            use_extended_search: true,
            ignore_field_norm: false,
            ignore_diacritics: false,
            limit: 10,
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<()> {
        if self.keys.is_empty() {
            return Err(Error::NoKeys);
        }
        for (i, kw) in self.keys.iter().enumerate() {
            if kw.weight <= 0.0 || !kw.weight.is_finite() {
                return Err(Error::InvalidWeight {
                    key: kw.key,
                    weight: kw.weight,
                });
            }
            if self.keys[..i].iter().any(|other| other.key == kw.key) {
                return Err(Error::DuplicateKey(kw.key));
            }
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        if self.limit == 0 {
            return Err(Error::Zero { name: "limit" });
        }
        Ok(())
    }

    /// Sum of all key weights, used to normalise them.
    pub fn total_weight(&self) -> f64 {
        self.keys.iter().map(|kw| kw.weight).sum()
    }
}

/// Palette behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionOptions {
    /// Quiet period after the last keystroke before the query runs.
    pub debounce_ms: u64,
    /// Results shown in the palette.
    pub limit: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            debounce_ms: 200,
            limit: 10,
        }
    }
}

impl SessionOptions {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(Error::Zero { name: "session limit" });
        }
        Ok(())
    }
}

/// Everything a config file can set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchOptions,
    pub session: SessionOptions,
}

impl Config {
    /// Parse and validate a JSON config.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw).map_err(|e| Error::json("config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        self.session.validate()
    }
}

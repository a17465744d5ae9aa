// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Building the search index.
//!
//! For every record and configured key, each non-blank value (the string, or
//! each element of a list field) is stored with:
//!
//! - its original text, which spans point into
//! - its folded characters, which the matchers compare against
//! - its field norm, `1 / sqrt(tokens)`, so short fields are not drowned out
//!
//! Key weights are normalised by their sum so only their ratios matter.
//!
//! # Determinism
//!
//! The same records and options always give an equal index with an equal
//! fingerprint. Parallel preparation (the `parallel` feature) keeps record
//! order, so it cannot change results.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SearchOptions;
use crate::types::{ContentRecord, FieldKey};
use crate::util::normalize::{field_norm, fold, token_count};

/// A configured key with its weight normalised to the key total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedKey {
    pub key: FieldKey,
    pub weight: f64,
}

/// One searchable value of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedValue {
    /// Position in [`SearchIndex::keys`].
    pub key: usize,
    /// Original text, as shown to users.
    pub text: String,
    /// Folded characters, one per character of `text`.
    pub folded: Vec<char>,
    pub norm: f64,
}

/// All searchable values of one record, in key order.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedRecord {
    /// Position in [`SearchIndex::records`].
    pub record: usize,
    pub values: Vec<IndexedValue>,
}

/// Immutable search index over one locale's records.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchIndex {
    records: Vec<ContentRecord>,
    keys: Vec<IndexedKey>,
    entries: Vec<IndexedRecord>,
    options: SearchOptions,
    fingerprint: u32,
}

impl SearchIndex {
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn keys(&self) -> &[IndexedKey] {
        &self.keys
    }

    pub fn entries(&self) -> &[IndexedRecord] {
        &self.entries
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// CRC32 over the records and key names the index was built from.
    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of indexed values across all records.
    pub fn value_count(&self) -> usize {
        self.entries.iter().map(|e| e.values.len()).sum()
    }

    /// Indexed value count per key, in key order.
    pub fn values_per_key(&self) -> Vec<(FieldKey, usize)> {
        self.keys
            .iter()
            .enumerate()
            .map(|(ki, k)| {
                let count = self
                    .entries
                    .iter()
                    .flat_map(|e| e.values.iter())
                    .filter(|v| v.key == ki)
                    .count();
                (k.key, count)
            })
            .collect()
    }
}

/// Build an index from records already filtered to one locale.
///
/// Never fails: blank or missing fields are simply not indexed, and an empty
/// record set gives an index that matches nothing.
pub fn build_index(records: &[ContentRecord], options: &SearchOptions) -> SearchIndex {
    let total = options.total_weight();
    let keys: Vec<IndexedKey> = options
        .keys
        .iter()
        .map(|kw| IndexedKey {
            key: kw.key,
            weight: if total > 0.0 { kw.weight / total } else { 0.0 },
        })
        .collect();

    #[cfg(feature = "parallel")]
    let entries: Vec<IndexedRecord> = records
        .par_iter()
        .enumerate()
        .map(|(i, record)| index_record(i, record, &keys, options))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let entries: Vec<IndexedRecord> = records
        .iter()
        .enumerate()
        .map(|(i, record)| index_record(i, record, &keys, options))
        .collect();

    let index = SearchIndex {
        records: records.to_vec(),
        fingerprint: fingerprint(records, options),
        keys,
        entries,
        options: options.clone(),
    };

    tracing::debug!(
        records = index.len(),
        values = index.value_count(),
        fingerprint = format_args!("{:08x}", index.fingerprint),
        "built search index"
    );
    index
}

fn index_record(
    i: usize,
    record: &ContentRecord,
    keys: &[IndexedKey],
    options: &SearchOptions,
) -> IndexedRecord {
    let mut values = Vec::new();
    for (ki, key) in keys.iter().enumerate() {
        for text in record.field_values(key.key) {
            if text.trim().is_empty() {
                continue;
            }
            values.push(IndexedValue {
                key: ki,
                text: text.to_string(),
                folded: fold(text, options.ignore_diacritics),
                norm: field_norm(token_count(text)),
            });
        }
    }
    IndexedRecord { record: i, values }
}

/// CRC32 over the serialized records and the configured key names.
///
/// Two record sets with the same fingerprint index identically under the same
/// options; [`IndexCache`](super::IndexCache) uses this to skip rebuilds.
pub fn fingerprint(records: &[ContentRecord], options: &SearchOptions) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for kw in &options.keys {
        hasher.update(kw.key.as_str().as_bytes());
        hasher.update(&kw.weight.to_le_bytes());
    }
    for record in records {
        // Serializing a plain data struct cannot fail
        if let Ok(bytes) = serde_json::to_vec(record) {
            hasher.update(&bytes);
        }
        hasher.update(&[0]);
    }
    hasher.finalize()
}

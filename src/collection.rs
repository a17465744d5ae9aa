// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The posts collection as a whole, and its per-locale slices.
//!
//! The content pipeline writes every post of every language into one JSON
//! array. The palette only ever searches one language at a time and never
//! shows drafts, so `for_locale` is what feeds the index builder.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ContentRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentCollection {
    records: Vec<ContentRecord>,
}

impl ContentCollection {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        ContentCollection { records }
    }

    /// Parse a JSON array of posts.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::json("posts collection", e))
    }

    /// Read a JSON array of posts from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let collection = Self::from_json_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            records = collection.len(),
            "loaded posts collection"
        );
        Ok(collection)
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Published records of one locale, in collection order.
    pub fn for_locale(&self, locale: &str) -> Vec<ContentRecord> {
        self.records
            .iter()
            .filter(|r| r.published && r.language == locale)
            .cloned()
            .collect()
    }

    /// Distinct locales with at least one published record, sorted.
    pub fn locales(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.published)
            .map(|r| r.language.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Check that published slugs are unique within each locale.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for record in self.records.iter().filter(|r| r.published) {
            if !seen.insert((record.language.as_str(), record.slug.as_str())) {
                return Err(Error::DuplicateSlug {
                    slug: record.slug.clone(),
                    locale: record.language.clone(),
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<ContentRecord>> for ContentCollection {
    fn from(records: Vec<ContentRecord>) -> Self {
        ContentCollection::new(records)
    }
}

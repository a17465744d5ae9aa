// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Caller-side memoisation of per-locale indexes.
//!
//! The builder itself never caches. This sits in front of it the way a UI
//! memo would: one slot per locale, reused while the record set's fingerprint
//! is unchanged, replaced by a freshly built index otherwise. Replaced indexes
//! are not touched, so an `Arc` handed out earlier stays valid.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::SearchOptions;
use crate::types::ContentRecord;

use super::builder::{build_index, fingerprint, SearchIndex};

#[derive(Debug, Default)]
pub struct IndexCache {
    options: SearchOptions,
    slots: HashMap<String, Arc<SearchIndex>>,
}

impl IndexCache {
    pub fn new(options: SearchOptions) -> Self {
        IndexCache {
            options,
            slots: HashMap::new(),
        }
    }

    /// The index for `locale`, rebuilt only when `records` changed.
    pub fn get_or_build(&mut self, locale: &str, records: &[ContentRecord]) -> Arc<SearchIndex> {
        let print = fingerprint(records, &self.options);
        if let Some(index) = self.slots.get(locale) {
            if index.fingerprint() == print {
                tracing::trace!(locale, "index cache hit");
                return Arc::clone(index);
            }
        }

        tracing::debug!(locale, records = records.len(), "index cache miss");
        let index = Arc::new(build_index(records, &self.options));
        self.slots.insert(locale.to_string(), Arc::clone(&index));
        index
    }

    /// Cached index for `locale`, if any.
    pub fn get(&self, locale: &str) -> Option<Arc<SearchIndex>> {
        self.slots.get(locale).cloned()
    }

    pub fn invalidate(&mut self, locale: &str) -> bool {
        self.slots.remove(locale).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

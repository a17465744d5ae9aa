//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::Arc;

use scour::{build_index, ContentRecord, SearchIndex, SearchOptions, SearchResult};

// Re-export canonical test utilities from scour::testing
pub use scour::testing::{make_full_record, make_record, sample_posts};

/// Published sample posts of one locale.
pub fn posts_for(locale: &str) -> Vec<ContentRecord> {
    sample_posts()
        .into_iter()
        .filter(|p| p.language == locale)
        .collect()
}

/// Index over the sample posts of one locale with default options.
pub fn locale_index(locale: &str) -> SearchIndex {
    build_index(&posts_for(locale), &SearchOptions::default())
}

pub fn shared_index(locale: &str) -> Arc<SearchIndex> {
    Arc::new(locale_index(locale))
}

/// Index over arbitrary records with default options.
pub fn index_of(records: &[ContentRecord]) -> SearchIndex {
    build_index(records, &SearchOptions::default())
}

pub fn slugs(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.slug()).collect()
}

pub fn sorted_slugs(results: &[SearchResult]) -> Vec<&str> {
    let mut slugs = slugs(results);
    slugs.sort_unstable();
    slugs
}

//! Same input, same index, same answers.

use std::sync::Arc;

use crate::common::{posts_for, sample_posts};
use scour::{build_index, fingerprint, search, IndexCache, SearchOptions};

#[test]
fn test_rebuild_is_structurally_equal() {
    let records = sample_posts();
    let a = build_index(&records, &SearchOptions::default());
    let b = build_index(&records, &SearchOptions::default());
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), fingerprint(&records, &SearchOptions::default()));
}

#[test]
fn test_repeated_search_is_identical() {
    let index = build_index(&sample_posts(), &SearchOptions::default());
    for query in ["rust", "'javascript", "pyrenees | generics$", "tutorial"] {
        assert_eq!(search(&index, query, 10), search(&index, query, 10));
    }
}

#[test]
fn test_fingerprint_tracks_content_and_weights() {
    let records = posts_for("en");
    let base = fingerprint(&records, &SearchOptions::default());

    let mut edited = records.clone();
    edited[0].title.push('!');
    assert_ne!(base, fingerprint(&edited, &SearchOptions::default()));

    let mut options = SearchOptions::default();
    options.keys[0].weight = 3.0;
    assert_ne!(base, fingerprint(&records, &options));
}

#[test]
fn test_cache_reuses_until_content_changes() {
    let mut cache = IndexCache::new(SearchOptions::default());
    let records = posts_for("en");

    let first = cache.get_or_build("en", &records);
    let again = cache.get_or_build("en", &records);
    assert!(Arc::ptr_eq(&first, &again));

    let mut edited = records.clone();
    edited.pop();
    let rebuilt = cache.get_or_build("en", &edited);
    assert!(!Arc::ptr_eq(&first, &rebuilt));
    // Readers of the old snapshot are unaffected
    assert_eq!(first.len(), records.len());
    assert_eq!(rebuilt.len(), edited.len());
}

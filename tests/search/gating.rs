//! Length gates: what never reaches the index, and what is too short to count.

use crate::common::{index_of, locale_index, make_full_record, make_record};
use scour::search;

#[test]
fn test_blank_and_single_char_queries_return_nothing() {
    let index = locale_index("en");
    for query in ["", " ", "r", "  r  ", "\t"] {
        assert!(search(&index, query, 10).is_empty(), "query {query:?}");
    }
}

#[test]
fn test_zero_limit_returns_nothing() {
    assert!(search(&locale_index("en"), "rust", 0).is_empty());
}

#[test]
fn test_two_chars_reach_index_but_need_identical_value() {
    let records = vec![
        make_full_record("en", "golang-intro", "Good morning", "", &["go"], &[]),
        make_record("en", "other", "Going places"),
    ];
    let results = search(&index_of(&records), "go", 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].slug(), "golang-intro");
}

#[test]
fn test_empty_index_matches_nothing() {
    assert!(search(&index_of(&[]), "rust", 10).is_empty());
}

#[test]
fn test_missing_excerpt_is_not_an_error() {
    let records = vec![make_record("en", "no-excerpt", "Rust without excerpt")];
    let results = search(&index_of(&records), "rust", 10);
    assert_eq!(results.len(), 1);
}

#[test]
fn test_limit_caps_results() {
    let records: Vec<_> = (0..8)
        .map(|i| make_record("en", &format!("rust-{i}"), &format!("Rust part {i}")))
        .collect();
    let index = index_of(&records);
    assert_eq!(search(&index, "rust", 3).len(), 3);
    assert_eq!(search(&index, "rust", 100).len(), 8);
}

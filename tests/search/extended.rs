//! Extended query syntax against the sample blog.

use crate::common::{index_of, locale_index, make_full_record, sorted_slugs};
use scour::{build_index, search, FieldKey, SearchOptions};

#[test]
fn test_include_operator() {
    let results = search(&locale_index("en"), "'javascript", 10);
    assert_eq!(
        sorted_slugs(&results),
        vec!["async-javascript-patterns", "typescript-generics"]
    );
}

#[test]
fn test_exact_operator_needs_whole_value() {
    let records = vec![
        make_full_record("en", "a", "Alpha", "", &["rust"], &[]),
        make_full_record("en", "b", "Beta", "", &["rustacean"], &[]),
    ];
    let results = search(&index_of(&records), "=rust", 10);
    assert_eq!(sorted_slugs(&results), vec!["a"]);
    assert_eq!(results[0].matched_keys(), vec![FieldKey::Tags]);
}

#[test]
fn test_prefix_and_suffix_operators() {
    let index = locale_index("en");
    assert_eq!(sorted_slugs(&search(&index, "^hiking", 10)), vec!["hiking-the-pyrenees"]);
    assert_eq!(sorted_slugs(&search(&index, "generics$", 10)), vec!["typescript-generics"]);
}

#[test]
fn test_or_groups() {
    let results = search(&locale_index("en"), "^hiking | generics$", 10);
    assert_eq!(
        sorted_slugs(&results),
        vec!["hiking-the-pyrenees", "typescript-generics"]
    );
}

#[test]
fn test_and_tokens_must_share_a_value() {
    let records = vec![
        make_full_record("en", "split", "Garlic bread", "", &["butter"], &[]),
        make_full_record("en", "together", "Garlic butter", "", &[], &[]),
    ];
    let results = search(&index_of(&records), "'garlic 'butter", 10);
    assert_eq!(sorted_slugs(&results), vec!["together"]);
}

#[test]
fn test_inverse_operator_excludes() {
    let records = vec![
        make_full_record("en", "keep", "Travel diary", "", &[], &[]),
        make_full_record("en", "drop", "Rust diary", "", &[], &[]),
    ];
    let results = search(&index_of(&records), "'diary !rust", 10);
    assert_eq!(sorted_slugs(&results), vec!["keep"]);
}

#[test]
fn test_operators_are_plain_text_when_disabled() {
    let options = SearchOptions {
        use_extended_search: false,
        ..SearchOptions::default()
    };
    let records = vec![make_full_record("en", "x", "Hiking trips", "", &[], &[])];
    let index = build_index(&records, &options);
    assert!(search(&index, "trips hiking", 10).is_empty());
    assert_eq!(search(&index, "hiking trips", 10).len(), 1);
}

#[test]
fn test_unspaced_pipe_is_literal() {
    let records = vec![
        make_full_record("en", "net", "TCP|UDP tuning", "", &[], &[]),
        make_full_record("en", "tcp", "TCP basics", "", &[], &[]),
    ];
    let index = index_of(&records);
    assert_eq!(sorted_slugs(&search(&index, "tcp|udp", 10)), vec!["net"]);
    assert_eq!(sorted_slugs(&search(&index, "tcp | udp", 10)), vec!["net", "tcp"]);
}

//! Ranking: weighted keys, accumulated hits, stable ties.

use crate::common::{index_of, locale_index, make_full_record, make_record, slugs};
use scour::search;

#[test]
fn test_best_match_first() {
    let results = search(&locale_index("en"), "rust", 10);
    assert_eq!(results[0].slug(), "getting-started-with-rust");
}

#[test]
fn test_scores_ascending() {
    let results = search(&locale_index("en"), "javascript", 10);
    assert!(results.len() >= 2);
    for pair in results.windows(2) {
        assert!(pair[0].score <= pair[1].score);
    }
}

#[test]
fn test_title_hit_beats_excerpt_hit() {
    let records = vec![
        make_full_record("en", "b-post", "Weekend notes", "cooking with garlic", &[], &[]),
        make_record("en", "a-post", "Cooking with garlic"),
    ];
    let results = search(&index_of(&records), "garlic", 10);
    assert_eq!(slugs(&results), vec!["a-post", "b-post"]);
}

#[test]
fn test_more_matching_fields_rank_higher() {
    let records = vec![
        make_record("en", "b-post", "Rust tips"),
        make_full_record("en", "a-post", "Rust tips", "", &["rust"], &[]),
    ];
    let results = search(&index_of(&records), "rust", 10);
    assert_eq!(slugs(&results), vec!["a-post", "b-post"]);
}

#[test]
fn test_equal_scores_keep_index_order() {
    let records = vec![
        make_record("en", "first", "Rust notes"),
        make_record("en", "second", "Rust notes"),
        make_record("en", "third", "Rust notes"),
    ];
    let results = search(&index_of(&records), "notes", 10);
    assert_eq!(slugs(&results), vec!["first", "second", "third"]);
    assert_eq!(results[0].score, results[2].score);
}

#[test]
fn test_exact_title_finds_its_record_first() {
    let index = locale_index("en");
    for record in index.records() {
        let results = search(&index, &record.title, 10);
        assert_eq!(
            results.first().map(|r| r.slug()),
            Some(record.slug.as_str()),
            "title {:?}",
            record.title
        );
    }
}

#[test]
fn test_exact_title_with_short_words() {
    for title in ["A Tour of Rust", "Go in Practice", "Rust en 10 minutos", "Go or C"] {
        let records = vec![
            make_record("en", "other", "Other Things"),
            make_record("en", "target", title),
        ];
        let results = search(&index_of(&records), title, 10);
        assert_eq!(slugs(&results).first(), Some(&"target"), "title {:?}", title);
    }
}

#[test]
fn test_only_matching_fields_are_reported() {
    let results = search(&locale_index("en"), "pyrenees", 10);
    let hit = &results[0];
    assert_eq!(hit.slug(), "hiking-the-pyrenees");
    assert!(!hit.matched_keys().is_empty());
    for span in &hit.matches {
        assert!(!span.indices.is_empty());
    }
}

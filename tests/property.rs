//! Property-based tests using proptest.
//!
//! Highlighting must cover its text exactly once whatever ranges it is given,
//! and indexing must be a pure function of its input.

mod common;

use common::{index_of, make_full_record, make_record};
use proptest::prelude::*;
use scour::{build_index, highlight_ranges, merge_ranges, render, search, SearchOptions, Segment};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Text mixing ASCII, accented and wide characters.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'z', ' ', 'é', 'ñ', 'ü', '日', '本', '-']),
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Ranges that may overlap, touch, run past the end or be inverted.
fn ranges_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..50, 0usize..50), 0..8)
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,8}").unwrap()
}

/// Blog-like titles mixing one and two letter words with longer ones, some
/// followed by punctuation.
fn title_strategy() -> impl Strategy<Value = String> {
    let words = vec![
        "A", "I", "Go", "of", "en", "10", "C", "la", "Tour", "Rust", "Practice", "minutos",
        "Guide", "async", "vida", "C++", "Node.js",
    ];
    let punctuation = vec!["", "", "", ",", ":", "?", "!", "."];
    prop::collection::vec(
        (prop::sample::select(words), prop::sample::select(punctuation)),
        1..7,
    )
    .prop_map(|words| {
        words
            .into_iter()
            .map(|(w, p)| format!("{w}{p}"))
            .collect::<Vec<_>>()
            .join(" ")
    })
}

// ============================================================================
// HIGHLIGHT
// ============================================================================

proptest! {
    #[test]
    fn prop_segments_cover_text_exactly(text in text_strategy(), ranges in ranges_strategy()) {
        let segments = highlight_ranges(&text, &ranges);
        prop_assert_eq!(render(&segments, "", ""), text);
    }

    #[test]
    fn prop_segments_alternate_and_are_non_empty(
        text in text_strategy(),
        ranges in ranges_strategy(),
    ) {
        let segments = highlight_ranges(&text, &ranges);
        if text.is_empty() {
            prop_assert_eq!(segments, vec![Segment::Plain(String::new())]);
        } else {
            for segment in &segments {
                prop_assert!(!segment.text().is_empty());
            }
            for pair in segments.windows(2) {
                prop_assert_ne!(pair[0].is_emphasized(), pair[1].is_emphasized());
            }
        }
    }

    #[test]
    fn prop_emphasized_chars_are_exactly_the_valid_ranges(
        text in text_strategy(),
        ranges in ranges_strategy(),
    ) {
        let len = text.chars().count();
        let mut expected = vec![false; len];
        for &(start, end) in &ranges {
            if start <= end && start < len {
                for flag in &mut expected[start..=end.min(len - 1)] {
                    *flag = true;
                }
            }
        }

        let mut actual = Vec::with_capacity(len);
        for segment in highlight_ranges(&text, &ranges) {
            let emphasized = segment.is_emphasized();
            actual.extend(segment.text().chars().map(|_| emphasized));
        }
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_merge_is_idempotent(ranges in ranges_strategy(), len in 0usize..60) {
        let once = merge_ranges(ranges.iter().copied(), len);
        let twice = merge_ranges(once.iter().copied(), len);
        prop_assert_eq!(&once, &twice);
        for pair in once.windows(2) {
            // Disjoint with at least one character between
            prop_assert!(pair[0].1 + 1 < pair[1].0);
        }
    }

    #[test]
    fn prop_highlight_of_merged_ranges_is_unchanged(
        text in text_strategy(),
        ranges in ranges_strategy(),
    ) {
        let merged = merge_ranges(ranges.iter().copied(), text.chars().count());
        prop_assert_eq!(highlight_ranges(&text, &ranges), highlight_ranges(&text, &merged));
    }
}

// ============================================================================
// INDEX AND SEARCH
// ============================================================================

proptest! {
    #[test]
    fn prop_rebuild_is_deterministic(titles in prop::collection::vec(word_strategy(), 0..10)) {
        let records: Vec<_> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| make_full_record("en", &format!("p{i}"), t, t, &[t.as_str()], &[]))
            .collect();
        let a = build_index(&records, &SearchOptions::default());
        let b = build_index(&records, &SearchOptions::default());
        prop_assert_eq!(a.fingerprint(), b.fingerprint());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_exact_title_finds_its_record(title in title_strategy()) {
        prop_assume!(title.chars().count() >= 2);
        let records = vec![
            make_record("en", "other", "Other Things"),
            make_record("en", "target", &title),
        ];
        let index = index_of(&records);

        let results = search(&index, &title, 10);
        prop_assert!(
            results.iter().any(|r| r.slug() == "target"),
            "title {:?} returned {:?}",
            title,
            results.iter().map(|r| r.slug()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn prop_tag_value_finds_its_record(
        tags in prop::collection::vec(word_strategy(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let records: Vec<_> = tags
            .iter()
            .enumerate()
            .map(|(i, t)| make_full_record("en", &format!("p{i}"), "Untitled", "", &[t.as_str()], &[]))
            .collect();
        let index = index_of(&records);
        let i = pick.index(tags.len());

        let results = search(&index, &format!("={}", tags[i]), 20);
        prop_assert!(results.iter().any(|r| r.record.tags[0] == tags[i]));
        prop_assert!(results.iter().all(|r| r.record.tags[0] == tags[i]));
    }
}

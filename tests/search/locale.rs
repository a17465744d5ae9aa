//! Per-locale indexes never leak into each other.

use crate::common::{locale_index, posts_for};
use scour::{build_index, search, SearchOptions};

#[test]
fn test_locale_indexes_are_disjoint() {
    let en = locale_index("en");
    let es = locale_index("es");
    assert_eq!(en.len(), posts_for("en").len());
    assert_eq!(es.len(), posts_for("es").len());

    for result in search(&es, "rust", 10) {
        assert_eq!(result.record.language, "es");
    }
    for result in search(&en, "rust", 10) {
        assert_eq!(result.record.language, "en");
    }
}

#[test]
fn test_spanish_query_on_spanish_index() {
    let results = search(&locale_index("es"), "senderismo", 10);
    assert_eq!(results[0].slug(), "senderismo-en-los-pirineos");
    assert!(search(&locale_index("en"), "senderismo", 10)
        .iter()
        .all(|r| r.slug() != "senderismo-en-los-pirineos"));
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_ignoring_diacritics_improves_unaccented_query() {
    let records = posts_for("es");
    let strict = build_index(&records, &SearchOptions::default());
    let folded = build_index(
        &records,
        &SearchOptions {
            ignore_diacritics: true,
            ..SearchOptions::default()
        },
    );

    let strict_hits = search(&strict, "programacion", 10);
    let folded_hits = search(&folded, "programacion", 10);
    assert_eq!(strict_hits[0].slug(), "primeros-pasos-con-rust");
    assert_eq!(folded_hits[0].slug(), "primeros-pasos-con-rust");
    assert!(folded_hits[0].score < strict_hits[0].score);
}

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{ContentRecord, RecordMetadata};

/// Fixed publication date so fixtures (and fingerprints) are reproducible.
pub fn fixture_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

/// Create a published record with a title and no other searchable content.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(language: &str, slug: &str, title: &str) -> ContentRecord {
    ContentRecord {
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: None,
        tags: vec![],
        categories: vec![],
        language: language.to_string(),
        date: fixture_date(),
        last_modified: None,
        metadata: RecordMetadata {
            reading_time: 3,
            word_count: 600,
        },
        published: true,
        pinned: false,
    }
}

/// Create a record with every searchable field filled in.
pub fn make_full_record(
    language: &str,
    slug: &str,
    title: &str,
    excerpt: &str,
    tags: &[&str],
    categories: &[&str],
) -> ContentRecord {
    ContentRecord {
        excerpt: Some(excerpt.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        ..make_record(language, slug, title)
    }
}

/// A small bilingual blog used by integration tests and benches.
pub fn sample_posts() -> Vec<ContentRecord> {
    vec![
        make_full_record(
            "en",
            "getting-started-with-rust",
            "Getting Started with Rust",
            "Install the toolchain, write your first program and learn how cargo works.",
            &["rust", "tutorial"],
            &["programming"],
        ),
        make_full_record(
            "en",
            "async-javascript-patterns",
            "Async JavaScript Patterns",
            "Promises, async functions and the event loop explained with practical examples.",
            &["javascript", "async"],
            &["programming", "web"],
        ),
        make_full_record(
            "en",
            "hiking-the-pyrenees",
            "Hiking the Pyrenees",
            "Two weeks on the GR10 trail, from the Atlantic to the Mediterranean.",
            &["travel", "mountains"],
            &["adventures"],
        ),
        make_full_record(
            "en",
            "typescript-generics",
            "Understanding TypeScript Generics",
            "Generic constraints, inference and conditional types for everyday code.",
            &["typescript", "javascript"],
            &["programming"],
        ),
        make_full_record(
            "es",
            "primeros-pasos-con-rust",
            "Primeros pasos con Rust",
            "Instala la cadena de herramientas y escribe tu primer programa.",
            &["rust", "tutorial"],
            &["programación"],
        ),
        make_full_record(
            "es",
            "senderismo-en-los-pirineos",
            "Senderismo en los Pirineos",
            "Dos semanas en el sendero GR10, del Atlántico al Mediterráneo.",
            &["viajes", "montañas"],
            &["aventuras"],
        ),
    ]
}

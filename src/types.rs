// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records we search and the results we hand back.
//!
//! `ContentRecord` mirrors one entry of the posts collection the content
//! pipeline emits (camelCase JSON, unknown keys ignored). Everything else here
//! is produced per query and thrown away when the query changes.
//!
//! # Offsets
//!
//! `MatchSpan::indices` are **character** offsets into `MatchSpan::value`, and
//! both ends are inclusive: `[0, 2]` covers the first three characters. The
//! highlighter relies on this, so anything that produces spans must follow it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A searchable field of a record.
///
/// The derived `Ord` is declaration order and only exists for deterministic
/// output. Relative importance lives in the configured weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Title,
    Excerpt,
    Tags,
    Categories,
    Slug,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Title,
        FieldKey::Excerpt,
        FieldKey::Tags,
        FieldKey::Categories,
        FieldKey::Slug,
    ];

    /// Lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::Excerpt => "excerpt",
            FieldKey::Tags => "tags",
            FieldKey::Categories => "categories",
            FieldKey::Slug => "slug",
        }
    }

    /// Does this key hold a list of values rather than a single string?
    pub fn is_list(&self) -> bool {
        matches!(self, FieldKey::Tags | FieldKey::Categories)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata computed by the content pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    /// Estimated reading time in minutes.
    #[serde(default)]
    pub reading_time: u32,
    #[serde(default)]
    pub word_count: u32,
}

/// One blog post as produced by the content pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Locale code, e.g. "en".
    pub language: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: RecordMetadata,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub pinned: bool,
}

fn default_published() -> bool {
    true
}

impl ContentRecord {
    /// Values of one field, in record order. Missing fields yield nothing.
    pub fn field_values(&self, key: FieldKey) -> Vec<&str> {
        match key {
            FieldKey::Title => vec![self.title.as_str()],
            FieldKey::Excerpt => self.excerpt.as_deref().into_iter().collect(),
            FieldKey::Tags => self.tags.iter().map(String::as_str).collect(),
            FieldKey::Categories => self.categories.iter().map(String::as_str).collect(),
            FieldKey::Slug => vec![self.slug.as_str()],
        }
    }

    /// The date a result badge shows: last modification when it differs from
    /// the publication date, otherwise the publication date.
    pub fn display_date(&self) -> DateTime<Utc> {
        match self.last_modified {
            Some(modified) if modified != self.date => modified,
            _ => self.date,
        }
    }

    /// Was the record modified after publication?
    pub fn is_updated(&self) -> bool {
        self.display_date() != self.date
    }

    /// The first `n` tags, for result badges.
    pub fn top_tags(&self, n: usize) -> &[String] {
        &self.tags[..self.tags.len().min(n)]
    }
}

/// Where a query matched inside one field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    pub key: FieldKey,
    /// The field value that matched (one element for list fields).
    pub value: String,
    /// Inclusive `[start, end]` character ranges into `value`, ascending.
    pub indices: Vec<(usize, usize)>,
}

/// A ranked record with the spans that put it there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub record: ContentRecord,
    /// Spans for fields that matched. Fields without a match are absent.
    pub matches: Vec<MatchSpan>,
    /// Relevance, lower is better. `0.0` is a perfect match.
    pub score: f64,
}

impl SearchResult {
    pub fn slug(&self) -> &str {
        &self.record.slug
    }

    /// Spans for one field.
    pub fn spans_for(&self, key: FieldKey) -> Vec<MatchSpan> {
        self.matches.iter().filter(|m| m.key == key).cloned().collect()
    }

    /// Fields that matched, in first-match order without repeats.
    pub fn matched_keys(&self) -> Vec<FieldKey> {
        let mut keys: Vec<FieldKey> = Vec::new();
        for span in &self.matches {
            if !keys.contains(&span.key) {
                keys.push(span.key);
            }
        }
        keys
    }
}

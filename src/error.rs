// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the fallible edges: loading collections and configuration.
//!
//! Searching, highlighting and the palette state machine never fail. Missing
//! fields are non-matchable and an empty result list is a normal answer, so
//! everything in here is about reading files and validating options.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::FieldKey;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON that does not fit the expected shape.
    #[error("invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key weights must be strictly positive.
    #[error("search key '{key}' has non-positive weight {weight}")]
    InvalidWeight { key: FieldKey, weight: f64 },

    /// The same key listed twice would double count its score.
    #[error("search key '{0}' is configured more than once")]
    DuplicateKey(FieldKey),

    /// An index with no keys can never match anything.
    #[error("no search keys configured")]
    NoKeys,

    /// Fuzzy threshold outside `0.0..=1.0`.
    #[error("threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),

    /// A result limit or debounce window of zero.
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },

    /// Two published records share a slug inside one locale.
    #[error("duplicate slug '{slug}' in locale '{locale}'")]
    DuplicateSlug { slug: String, locale: String },
}

impl Error {
    pub(crate) fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Json {
            context: context.into(),
            source,
        }
    }
}

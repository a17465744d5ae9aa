// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the palette looks like at any instant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse palette state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Closed,
    /// Open with nothing to show: empty, too short, or just opened.
    OpenEmpty,
    /// A debounce timer is pending for the current query.
    OpenSearching,
    /// Results for the current query are on screen. May be zero of them.
    OpenResults,
}

impl Phase {
    pub fn is_open(self) -> bool {
        self != Phase::Closed
    }
}

/// The fields a palette renders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionState {
    pub query: String,
    pub open: bool,
    /// `-1` when nothing is focused, otherwise an index into the results.
    pub focused_index: isize,
    /// True while a debounce timer is pending.
    pub searching: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        InteractionState {
            query: String::new(),
            open: false,
            focused_index: -1,
            searching: false,
        }
    }
}

impl InteractionState {
    pub fn focused(&self) -> Option<usize> {
        usize::try_from(self.focused_index).ok()
    }
}

/// Where selecting a result takes the reader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub locale: String,
    pub slug: String,
}

impl Route {
    pub fn new(locale: impl Into<String>, slug: impl Into<String>) -> Self {
        Route {
            locale: locale.into(),
            slug: slug.into(),
        }
    }

    /// `/{locale}/blog/{slug}`
    pub fn path(&self) -> String {
        format!("/{}/blog/{}", self.locale, self.slug)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The one-line hint under the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "count", rename_all = "camelCase")]
pub enum StatusHint {
    /// Waiting out the debounce.
    Starting,
    TypeToSearch,
    /// Long enough to query, too short to match anything.
    MinChars,
    NoResults,
    Results(usize),
}

//! Fuzzy search for a blog's posts, and the command palette that drives it.
//!
//! Records are indexed per locale, queried with weighted approximate matching
//! across title, excerpt, tags, categories and slug, and the matched ranges
//! are turned into highlight segments for display. The palette itself is a
//! small state machine that debounces keystrokes and handles keyboard
//! navigation, with timers and navigation left to the host.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ collection.rs│────▶│   index/     │────▶│   search/    │
//! │ (posts.json, │     │ (build_index,│     │ (search,     │
//! │  for_locale) │     │  IndexCache) │     │  ranking)    │
//! └──────────────┘     └──────────────┘     └──────┬───────┘
//!                             ▲                    │ uses
//!                             │              ┌─────┴──────┐
//!                      ┌──────┴──────┐       │  query/    │
//!                      │  session/   │       │  fuzzy/    │
//!                      │ (palette    │       └────────────┘
//!                      │  controller)│
//!                      └─────────────┘     ┌──────────────┐
//!                                          │ highlight.rs │
//!                                          │ (spans →     │
//!                                          │  segments)   │
//!                                          └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use scour::{build_index, highlight, search, ContentCollection, FieldKey, SearchOptions};
//!
//! let posts = ContentCollection::load("posts.json".as_ref())?;
//! let index = build_index(&posts.for_locale("en"), &SearchOptions::default());
//!
//! for result in search(&index, "rust generics", 10) {
//!     let title = highlight(&result.record.title, &result.spans_for(FieldKey::Title));
//!     println!("{:.3} {:?}", result.score, title);
//! }
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod index;
pub mod query;
pub mod search;
pub mod session;
pub mod testing;
pub mod types;
pub mod util;

pub use collection::ContentCollection;
pub use config::{Config, KeyWeight, SearchOptions, SessionOptions};
pub use error::{Error, Result};
pub use highlight::{highlight, highlight_ranges, merge_ranges, render, Segment};
pub use index::{build_index, fingerprint, IndexCache, SearchIndex};
pub use search::utils::{filter_by_score, format_excerpt};
pub use search::{search, search_default};
pub use session::{
    Effect, Event, InteractionState, Key, KeyPress, Phase, Route, SearchSession, StatusHint,
    TimerId,
};
pub use types::{ContentRecord, FieldKey, MatchSpan, RecordMetadata, SearchResult};

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The command palette as an event-driven state machine.
//!
//! ```text
//!            Open / Ctrl+K
//!   Closed ───────────────► OpenEmpty
//!     ▲                        │ QueryChanged
//!     │ Close / Esc            ▼
//!     │ Navigate        OpenSearching ◄─── QueryChanged
//!     │                        │ TimerFired(pending id)
//!     │                        ▼
//!     └──────────────────  OpenResults   (↑/↓ move focus, wraps)
//! ```
//!
//! A timer firing for a query shorter than `min_match_char_length` lands in
//! `OpenEmpty` instead. There is one pending timer per session at most;
//! a timer id that is not the pending one is ignored.

mod controller;
mod event;
mod state;

pub use controller::SearchSession;
pub use event::{bind_key, Effect, Event, Key, KeyPress, Modifiers, TimerId};
pub use state::{InteractionState, Phase, Route, StatusHint};

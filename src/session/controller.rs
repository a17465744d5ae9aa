// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use crate::config::SessionOptions;
use crate::index::SearchIndex;
use crate::search::search;
use crate::types::SearchResult;

use super::event::{bind_key, Effect, Event, TimerId};
use super::state::{InteractionState, Phase, Route, StatusHint};

/// One command palette bound to one locale's index.
#[derive(Debug)]
pub struct SearchSession {
    index: Arc<SearchIndex>,
    locale: String,
    options: SessionOptions,
    state: InteractionState,
    phase: Phase,
    results: Vec<SearchResult>,
    pending: Option<TimerId>,
    next_timer: u64,
}

impl SearchSession {
    pub fn new(index: Arc<SearchIndex>, locale: impl Into<String>, options: SessionOptions) -> Self {
        SearchSession {
            index,
            locale: locale.into(),
            options,
            state: InteractionState::default(),
            phase: Phase::Closed,
            results: Vec::new(),
            pending: None,
            next_timer: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    /// The timer the session is currently waiting on.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    /// Apply one event and return what the host must do about it.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Open => self.open(),
            Event::Close => self.close(),
            Event::QueryChanged(query) => {
                if !self.phase.is_open() {
                    return Vec::new();
                }
                self.state.query = query;
                self.debounce()
            }
            Event::TimerFired(id) => {
                self.timer_fired(id);
                Vec::new()
            }
            Event::Next => {
                self.step(true);
                Vec::new()
            }
            Event::Previous => {
                self.step(false);
                Vec::new()
            }
            Event::Focus(i) => {
                if self.phase == Phase::OpenResults && i < self.results.len() {
                    self.state.focused_index = i as isize;
                }
                Vec::new()
            }
            Event::Confirm => match self.state.focused() {
                Some(i) => self.select(i),
                None => Vec::new(),
            },
            Event::Select(i) => self.select(i),
            Event::Key(press) => match bind_key(&press, self.phase.is_open()) {
                Some(event) => self.handle(event),
                None => Vec::new(),
            },
        }
    }

    /// Swap in another index, typically after a locale switch.
    ///
    /// A query already in the box is evaluated again through a fresh debounce
    /// so the visible results never mix two indexes.
    pub fn set_index(&mut self, index: Arc<SearchIndex>, locale: impl Into<String>) -> Vec<Effect> {
        self.index = index;
        self.locale = locale.into();
        tracing::debug!(locale = %self.locale, records = self.index.len(), "session index replaced");

        if !self.phase.is_open() {
            return Vec::new();
        }
        if self.state.query.trim().is_empty() {
            let effects = self.cancel_pending();
            self.show_empty();
            return effects;
        }
        self.debounce()
    }

    /// The hint line under the search box. `None` while closed, or when the
    /// query is a single character and there is nothing useful to say.
    pub fn status(&self) -> Option<StatusHint> {
        if !self.phase.is_open() {
            return None;
        }
        if self.state.searching {
            return Some(StatusHint::Starting);
        }
        let options = self.index.options();
        let len = self.state.query.trim().chars().count();
        if len == 0 {
            Some(StatusHint::TypeToSearch)
        } else if len < options.min_query_len {
            None
        } else if len < options.min_match_char_length {
            Some(StatusHint::MinChars)
        } else if self.results.is_empty() {
            Some(StatusHint::NoResults)
        } else {
            Some(StatusHint::Results(self.results.len()))
        }
    }

    fn open(&mut self) -> Vec<Effect> {
        let effects = self.cancel_pending();
        self.reset();
        self.state.open = true;
        self.phase = Phase::OpenEmpty;
        tracing::debug!(locale = %self.locale, "palette opened");
        effects
    }

    fn close(&mut self) -> Vec<Effect> {
        let effects = self.cancel_pending();
        if self.phase.is_open() {
            tracing::debug!(locale = %self.locale, "palette closed");
        }
        self.reset();
        effects
    }

    fn reset(&mut self) {
        self.state = InteractionState::default();
        self.phase = Phase::Closed;
        self.results.clear();
    }

    fn cancel_pending(&mut self) -> Vec<Effect> {
        match self.pending.take() {
            Some(id) => {
                tracing::trace!(timer = id.0, "debounce cancelled");
                vec![Effect::CancelTimer(id)]
            }
            None => Vec::new(),
        }
    }

    fn debounce(&mut self) -> Vec<Effect> {
        let mut effects = self.cancel_pending();
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        self.pending = Some(id);
        self.state.searching = true;
        self.phase = Phase::OpenSearching;
        tracing::trace!(timer = id.0, "debounce scheduled");
        effects.push(Effect::ScheduleTimer {
            id,
            after: self.options.debounce(),
        });
        effects
    }

    fn timer_fired(&mut self, id: TimerId) {
        if self.pending != Some(id) {
            tracing::trace!(timer = id.0, "stale timer ignored");
            return;
        }
        self.pending = None;
        self.state.searching = false;

        let qualifies =
            self.state.query.trim().chars().count() >= self.index.options().min_match_char_length;
        if !qualifies {
            self.show_empty();
            return;
        }

        self.results = search(&self.index, &self.state.query, self.options.limit);
        self.state.focused_index = -1;
        self.phase = Phase::OpenResults;
        tracing::debug!(
            query = %self.state.query.trim(),
            results = self.results.len(),
            "palette results"
        );
    }

    fn show_empty(&mut self) {
        self.results.clear();
        self.state.searching = false;
        self.state.focused_index = -1;
        self.phase = Phase::OpenEmpty;
    }

    fn step(&mut self, forward: bool) {
        if self.phase != Phase::OpenResults || self.results.is_empty() {
            return;
        }
        let last = self.results.len() as isize - 1;
        let current = self.state.focused_index;
        self.state.focused_index = if forward {
            if current < last {
                current + 1
            } else {
                0
            }
        } else if current > 0 {
            current - 1
        } else {
            last
        };
    }

    fn select(&mut self, i: usize) -> Vec<Effect> {
        if self.phase != Phase::OpenResults {
            return Vec::new();
        }
        let Some(result) = self.results.get(i) else {
            return Vec::new();
        };
        let route = Route::new(self.locale.clone(), result.slug());
        tracing::debug!(route = %route, "palette navigate");

        let mut effects = vec![Effect::Navigate(route)];
        effects.extend(self.close());
        effects
    }
}

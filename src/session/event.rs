// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inputs to and outputs from the session.
//!
//! The session never sleeps or navigates by itself. It asks the host to do so
//! through [`Effect`]s, and the host reports back through [`Event`]s. That
//! keeps the controller deterministic and lets tests fire timers by hand.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::state::Route;

/// Handle for one scheduled debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Open,
    Close,
    QueryChanged(String),
    TimerFired(TimerId),
    Next,
    Previous,
    Confirm,
    /// Pointer hover or keyboard focus on a result.
    Focus(usize),
    /// Click on a result.
    Select(usize),
    Key(KeyPress),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    ScheduleTimer { id: TimerId, after: Duration },
    CancelTimer(TimerId),
    Navigate(Route),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        KeyPress {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    /// Ctrl+K or Cmd+K.
    pub fn is_palette_shortcut(&self) -> bool {
        matches!(self.key, Key::Char('k') | Key::Char('K'))
            && (self.modifiers.ctrl || self.modifiers.meta)
    }
}

/// Map a key press to the event it stands for, if any.
///
/// The shortcut opens the palette whether or not it is already open. The
/// other bindings only apply while open; everything else is left to the
/// search box.
pub fn bind_key(press: &KeyPress, open: bool) -> Option<Event> {
    if press.is_palette_shortcut() {
        return Some(Event::Open);
    }
    if !open {
        return None;
    }
    match press.key {
        Key::ArrowDown => Some(Event::Next),
        Key::ArrowUp => Some(Event::Previous),
        Key::Enter => Some(Event::Confirm),
        Key::Escape => Some(Event::Close),
        Key::Char(_) | Key::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_opens_from_anywhere() {
        let ctrl_k = KeyPress::new(Key::Char('k')).ctrl();
        let cmd_k = KeyPress::new(Key::Char('k')).meta();
        assert_eq!(bind_key(&ctrl_k, false), Some(Event::Open));
        assert_eq!(bind_key(&cmd_k, true), Some(Event::Open));
        assert_eq!(bind_key(&KeyPress::new(Key::Char('k')), false), None);
    }

    #[test]
    fn test_navigation_keys_only_when_open() {
        let down = KeyPress::new(Key::ArrowDown);
        assert_eq!(bind_key(&down, false), None);
        assert_eq!(bind_key(&down, true), Some(Event::Next));
        assert_eq!(bind_key(&KeyPress::new(Key::ArrowUp), true), Some(Event::Previous));
        assert_eq!(bind_key(&KeyPress::new(Key::Enter), true), Some(Event::Confirm));
        assert_eq!(bind_key(&KeyPress::new(Key::Escape), true), Some(Event::Close));
    }

    #[test]
    fn test_typing_is_unbound() {
        assert_eq!(bind_key(&KeyPress::new(Key::Char('a')), true), None);
        assert_eq!(bind_key(&KeyPress::new(Key::Other), true), None);
    }
}

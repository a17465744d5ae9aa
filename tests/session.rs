//! Palette flows end to end, with the test acting as the host.

mod common;

use std::collections::VecDeque;

use common::shared_index;
use scour::session::Modifiers;
use scour::{
    Effect, Event, Key, KeyPress, Phase, Route, SearchSession, SessionOptions, StatusHint,
};

/// A host that fires timers immediately and records navigations.
struct Host {
    session: SearchSession,
    navigated: Vec<Route>,
}

impl Host {
    fn new(locale: &str) -> Self {
        Host {
            session: SearchSession::new(shared_index(locale), locale, SessionOptions::default()),
            navigated: Vec::new(),
        }
    }

    fn send(&mut self, event: Event) {
        let mut queue: VecDeque<Effect> = self.session.handle(event).into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::ScheduleTimer { id, .. } => {
                    queue.extend(self.session.handle(Event::TimerFired(id)))
                }
                Effect::CancelTimer(_) => {}
                Effect::Navigate(route) => self.navigated.push(route),
            }
        }
    }

    fn key(&mut self, key: Key) {
        self.send(Event::Key(KeyPress::new(key)));
    }

    fn type_query(&mut self, query: &str) {
        self.send(Event::QueryChanged(query.to_string()));
    }
}

#[test]
fn test_search_and_pick_with_keyboard() {
    let mut host = Host::new("en");
    host.send(Event::Key(KeyPress {
        key: Key::Char('k'),
        modifiers: Modifiers {
            meta: true,
            ..Modifiers::default()
        },
    }));
    assert_eq!(host.session.phase(), Phase::OpenEmpty);

    host.type_query("javascript");
    assert_eq!(host.session.phase(), Phase::OpenResults);
    let results = host.session.results().len();
    assert!(results >= 2);
    assert_eq!(host.session.status(), Some(StatusHint::Results(results)));
    assert_eq!(host.session.results()[0].slug(), "async-javascript-patterns");

    host.key(Key::ArrowDown);
    host.key(Key::ArrowDown);
    host.key(Key::ArrowUp);
    assert_eq!(host.session.state().focused_index, 0);

    host.key(Key::Enter);
    assert_eq!(
        host.navigated,
        vec![Route::new("en", "async-javascript-patterns")]
    );
    assert_eq!(host.navigated[0].path(), "/en/blog/async-javascript-patterns");
    assert_eq!(host.session.phase(), Phase::Closed);
}

#[test]
fn test_arrow_up_from_nothing_focuses_last() {
    let mut host = Host::new("en");
    host.send(Event::Open);
    host.type_query("javascript");
    let last = host.session.results().len() as isize - 1;
    host.key(Key::ArrowUp);
    assert_eq!(host.session.state().focused_index, last);
    host.key(Key::ArrowDown);
    assert_eq!(host.session.state().focused_index, 0);
}

#[test]
fn test_refining_query_resets_focus() {
    let mut host = Host::new("en");
    host.send(Event::Open);
    host.type_query("javascript");
    host.key(Key::ArrowDown);
    assert_eq!(host.session.state().focused_index, 0);

    host.type_query("typescript");
    assert_eq!(host.session.state().focused_index, -1);
    assert_eq!(host.session.results()[0].slug(), "typescript-generics");
}

#[test]
fn test_hint_progression() {
    let mut host = Host::new("en");
    host.send(Event::Open);
    assert_eq!(host.session.status(), Some(StatusHint::TypeToSearch));

    host.type_query("ty");
    assert_eq!(host.session.status(), Some(StatusHint::MinChars));

    host.type_query("qqqqqqqq");
    assert_eq!(host.session.status(), Some(StatusHint::NoResults));

    host.key(Key::Escape);
    assert_eq!(host.session.status(), None);
}

#[test]
fn test_click_selects_in_current_locale() {
    let mut host = Host::new("es");
    host.send(Event::Open);
    host.type_query("rust");
    host.send(Event::Focus(0));
    host.send(Event::Select(0));
    assert_eq!(
        host.navigated,
        vec![Route::new("es", "primeros-pasos-con-rust")]
    );
}

#[test]
fn test_locale_switch_reruns_query() {
    let mut host = Host::new("en");
    host.send(Event::Open);
    host.type_query("rust");
    assert_eq!(host.session.results()[0].slug(), "getting-started-with-rust");

    let effects = host.session.set_index(shared_index("es"), "es");
    assert!(matches!(effects.last(), Some(Effect::ScheduleTimer { .. })));
    for effect in effects {
        if let Effect::ScheduleTimer { id, .. } = effect {
            host.send(Event::TimerFired(id));
        }
    }
    assert_eq!(host.session.results()[0].slug(), "primeros-pasos-con-rust");
}

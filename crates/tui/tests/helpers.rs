//! Shared helpers for integration tests.
//!
//! Drives the app the way the runtime does: translate a key through
//! `handle_input`, then apply the resulting action through `update`.

#![allow(dead_code)]

use std::cell::RefCell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use intake_tui::{Action, App, FormState, SubmitSink};

pub fn create_test_app() -> App {
    App::default()
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// One key press through the full translate-then-reduce path.
pub fn press(app: &mut App, event: KeyEvent) -> Option<Action> {
    let action = app.handle_input(event)?;
    app.update(action.clone());
    Some(action)
}

/// Type a string into the focused text control.
pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, char_key(c));
    }
}

/// Sink that captures submitted snapshots as JSON for assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub snapshots: RefCell<Vec<serde_json::Value>>,
}

impl SubmitSink for RecordingSink {
    fn deliver(&self, snapshot: &FormState) {
        self.snapshots
            .borrow_mut()
            .push(serde_json::to_value(snapshot).expect("FormState serializes"));
    }
}

/// One key press with submission delivery, mirroring the main loop.
pub fn press_with_sink(app: &mut App, sink: &RecordingSink, event: KeyEvent) {
    if let Some(action) = app.handle_input(event) {
        let submitted = matches!(action, Action::SubmitRequested);
        app.update(action);
        if submitted {
            sink.deliver(&app.form);
        }
    }
}

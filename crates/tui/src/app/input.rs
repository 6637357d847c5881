//! Key-to-action translation.
//!
//! Responsibilities:
//! - Map key events on the focused control to semantic Actions.
//! - Route editing keys into the focused text editor and forward the
//!   resulting value as a change.
//!
//! Does NOT handle:
//! - State mutation beyond the editors themselves (see `update`).
//! - Rendering (see `ui`).
//!
//! Invariants:
//! - Enter never inserts text and never submits from a non-submit control.
//! - Arrow Up/Down always mean list navigation, on every control.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::fields::{EMPLOYMENT_OPTIONS, FieldId, FieldValue};
use crate::focus::{ControlId, FocusDirection};

impl App {
    /// Translate a key press into an Action, if it means anything here.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Some(Action::Quit),
                KeyCode::Char('t') => return Some(Action::ThemeCycled),
                // Remaining Ctrl chords belong to the focused editor
                // (word navigation, kill-line).
                _ => {}
            }
        }

        if self.color_menu.is_some() {
            return Self::menu_input(key);
        }

        match key.code {
            KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Down => return Some(Action::FocusMoved(FocusDirection::Down)),
            KeyCode::Up => return Some(Action::FocusMoved(FocusDirection::Up)),
            KeyCode::Tab => return Some(Action::FocusMoved(FocusDirection::Down)),
            KeyCode::BackTab => return Some(Action::FocusMoved(FocusDirection::Up)),
            KeyCode::Enter => return self.activate_focused(),
            _ => {}
        }

        // Space is the pointer-activation analog everywhere except inside
        // text controls, where it types a space.
        if key.code == KeyCode::Char(' ') && self.focus.current().text_field().is_none() {
            return self.activate_focused();
        }

        // Native radio-group arrows: Left/Right cycle and select within the
        // group, wrapping at the ends.
        if let ControlId::Employment(index) = self.focus.current()
            && matches!(key.code, KeyCode::Left | KeyCode::Right)
        {
            return self.cycle_radio(index, key.code);
        }

        self.editor_key(key)
    }

    /// Enter/Space semantics for the focused control.
    ///
    /// Checkbox and radios toggle and forward a synthetic change; the color
    /// select opens its menu; Submit submits. Everywhere else the key is
    /// suppressed so typing never submits the form.
    fn activate_focused(&mut self) -> Option<Action> {
        match self.focus.current() {
            ControlId::IsFriendly => Some(Action::FieldChanged {
                field: FieldId::IsFriendly,
                value: FieldValue::flag(!self.form.is_friendly),
            }),
            ControlId::Employment(index) => Some(Action::FieldChanged {
                field: FieldId::Employment,
                value: FieldValue::text(EMPLOYMENT_OPTIONS[index].value),
            }),
            ControlId::FavouriteColor => Some(Action::ColorMenuOpened),
            ControlId::Submit => Some(Action::SubmitRequested),
            _ => None,
        }
    }

    fn cycle_radio(&mut self, index: usize, code: KeyCode) -> Option<Action> {
        let len = EMPLOYMENT_OPTIONS.len();
        let next = match code {
            KeyCode::Right => (index + 1) % len,
            _ => (index + len - 1) % len,
        };
        self.focus.focus(ControlId::Employment(next));
        Some(Action::FieldChanged {
            field: FieldId::Employment,
            value: FieldValue::text(EMPLOYMENT_OPTIONS[next].value),
        })
    }

    /// Route a key to the focused text editor and forward the new value.
    fn editor_key(&mut self, key: KeyEvent) -> Option<Action> {
        let field = self.focus.current().text_field()?;
        let value = self.editors.apply_key(field, key)?;
        Some(Action::FieldChanged {
            field,
            value: FieldValue::Text(value),
        })
    }

    /// Keys while the color menu is open.
    fn menu_input(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::ColorMenuCancelled),
            KeyCode::Up => Some(Action::ColorMenuMoved(FocusDirection::Up)),
            KeyCode::Down => Some(Action::ColorMenuMoved(FocusDirection::Down)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ColorMenuConfirmed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_translate_to_focus_moves() {
        let mut app = App::default();
        assert_eq!(
            app.handle_input(key(KeyCode::Down)),
            Some(Action::FocusMoved(FocusDirection::Down))
        );
        assert_eq!(
            app.handle_input(key(KeyCode::Up)),
            Some(Action::FocusMoved(FocusDirection::Up))
        );
    }

    #[test]
    fn enter_on_text_control_is_suppressed() {
        let mut app = App::default();
        assert!(app.focus.is_focused(ControlId::FirstName));
        assert_eq!(app.handle_input(key(KeyCode::Enter)), None);
    }

    #[test]
    fn enter_on_checkbox_forwards_a_flag_change() {
        let mut app = App::default();
        app.focus.focus(ControlId::IsFriendly);
        assert_eq!(
            app.handle_input(key(KeyCode::Enter)),
            Some(Action::FieldChanged {
                field: FieldId::IsFriendly,
                value: FieldValue::flag(true),
            })
        );
    }

    #[test]
    fn enter_on_submit_requests_submission() {
        let mut app = App::default();
        app.focus.focus(ControlId::Submit);
        assert_eq!(
            app.handle_input(key(KeyCode::Enter)),
            Some(Action::SubmitRequested)
        );
    }

    #[test]
    fn space_types_into_text_controls() {
        let mut app = App::default();
        let action = app.handle_input(key(KeyCode::Char(' ')));
        assert_eq!(
            action,
            Some(Action::FieldChanged {
                field: FieldId::FirstName,
                value: FieldValue::text(" "),
            })
        );
    }

    #[test]
    fn radio_right_cycles_with_wrap() {
        let mut app = App::default();
        app.focus.focus(ControlId::Employment(2));
        let action = app.handle_input(key(KeyCode::Right));
        assert_eq!(
            action,
            Some(Action::FieldChanged {
                field: FieldId::Employment,
                value: FieldValue::text("unemployed"),
            })
        );
        assert!(app.focus.is_focused(ControlId::Employment(0)));
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = App::default();
        let quit = app.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(quit, Some(Action::Quit));
    }
}

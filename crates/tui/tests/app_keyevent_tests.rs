//! Tests for per-control key semantics.
//!
//! This module tests:
//! - Typing forwards values to the store verbatim
//! - Enter suppression on text controls
//! - Enter/Space toggle semantics for checkbox and radios
//! - The color menu flow
//!
//! ## Invariants
//! - Enter must never submit the form from a non-submit control.
//! - Selecting a radio leaves every other field untouched.

mod helpers;
use helpers::*;

use crossterm::event::KeyCode;
use intake_tui::{Action, ControlId};

#[test]
fn test_typing_updates_the_bound_field_only() {
    let mut app = create_test_app();
    type_str(&mut app, "Ada");

    assert_eq!(app.form.first_name, "Ada");
    assert_eq!(app.form.last_name, "");
    assert_eq!(app.form.email, "");
    assert_eq!(app.form.comments, "");
}

#[test]
fn test_backspace_is_forwarded_verbatim() {
    let mut app = create_test_app();
    type_str(&mut app, "Adaa");
    press(&mut app, key(KeyCode::Backspace));

    assert_eq!(app.form.first_name, "Ada");
}

#[test]
fn test_enter_on_text_control_does_not_submit() {
    let mut app = create_test_app();
    type_str(&mut app, "Ada");

    let action = app.handle_input(key(KeyCode::Enter));

    assert_eq!(action, None, "Enter is suppressed while typing");
    assert_eq!(app.submission_count, 0);
    assert_eq!(app.form.first_name, "Ada");
}

#[test]
fn test_enter_in_comments_neither_submits_nor_edits() {
    let mut app = create_test_app();
    app.focus.focus(ControlId::Comments);
    type_str(&mut app, "hello");

    press(&mut app, key(KeyCode::Enter));

    assert_eq!(app.form.comments, "hello", "no newline inserted");
    assert_eq!(app.submission_count, 0);
}

#[test]
fn test_enter_toggles_the_checkbox() {
    let mut app = create_test_app();
    app.focus.focus(ControlId::IsFriendly);

    press(&mut app, key(KeyCode::Enter));
    assert!(app.form.is_friendly);

    press(&mut app, key(KeyCode::Enter));
    assert!(!app.form.is_friendly);
}

#[test]
fn test_space_and_enter_toggle_identically() {
    let mut enter_app = create_test_app();
    enter_app.focus.focus(ControlId::IsFriendly);
    press(&mut enter_app, key(KeyCode::Enter));

    let mut space_app = create_test_app();
    space_app.focus.focus(ControlId::IsFriendly);
    press(&mut space_app, key(KeyCode::Char(' ')));

    assert_eq!(enter_app.form, space_app.form);
    assert!(space_app.form.is_friendly);
}

#[test]
fn test_checkbox_toggle_leaves_other_fields_alone() {
    let mut app = create_test_app();
    type_str(&mut app, "Ada");
    app.focus.focus(ControlId::IsFriendly);
    let mut expected = app.form.clone();
    expected.is_friendly = true;

    press(&mut app, key(KeyCode::Enter));

    assert_eq!(app.form, expected);
}

#[test]
fn test_radio_enter_selects_exactly_that_option() {
    let mut app = create_test_app();
    app.focus.focus(ControlId::Employment(1));

    press(&mut app, key(KeyCode::Enter));

    assert_eq!(app.form.employment, "part-time");
}

#[test]
fn test_radio_reselection_is_idempotent() {
    let mut app = create_test_app();
    app.focus.focus(ControlId::Employment(2));

    press(&mut app, key(KeyCode::Enter));
    press(&mut app, key(KeyCode::Enter));

    assert_eq!(app.form.employment, "full-time");
}

#[test]
fn test_radio_selection_overwrites_previous_choice() {
    let mut app = create_test_app();
    app.focus.focus(ControlId::Employment(0));
    press(&mut app, key(KeyCode::Enter));
    assert_eq!(app.form.employment, "unemployed");

    app.focus.focus(ControlId::Employment(2));
    press(&mut app, key(KeyCode::Enter));

    assert_eq!(app.form.employment, "full-time", "options are mutually exclusive");
}

#[test]
fn test_radio_left_right_cycle_and_select() {
    let mut app = create_test_app();
    app.focus.focus(ControlId::Employment(0));

    press(&mut app, key(KeyCode::Right));
    assert!(app.focus.is_focused(ControlId::Employment(1)));
    assert_eq!(app.form.employment, "part-time");

    press(&mut app, key(KeyCode::Left));
    assert!(app.focus.is_focused(ControlId::Employment(0)));
    assert_eq!(app.form.employment, "unemployed");

    // Wrap backwards from the first option.
    press(&mut app, key(KeyCode::Left));
    assert!(app.focus.is_focused(ControlId::Employment(2)));
    assert_eq!(app.form.employment, "full-time");
}

#[test]
fn test_enter_on_select_opens_the_menu() {
    let mut app = create_test_app();
    app.focus.focus(ControlId::FavouriteColor);

    let action = press(&mut app, key(KeyCode::Enter));

    assert_eq!(action, Some(Action::ColorMenuOpened));
    assert!(app.color_menu.is_some());
}

#[test]
fn test_menu_flow_selects_a_color() {
    let mut app = create_test_app();
    app.focus.focus(ControlId::FavouriteColor);
    press(&mut app, key(KeyCode::Enter));

    // red -> orange -> yellow
    press(&mut app, key(KeyCode::Down));
    press(&mut app, key(KeyCode::Down));
    press(&mut app, key(KeyCode::Enter));

    assert_eq!(app.form.favourite_color, "yellow");
    assert!(app.color_menu.is_none());
}

#[test]
fn test_menu_escape_cancels_without_changing_selection() {
    let mut app = create_test_app();
    app.focus.focus(ControlId::FavouriteColor);
    press(&mut app, key(KeyCode::Enter));
    press(&mut app, key(KeyCode::Down));

    press(&mut app, key(KeyCode::Esc));

    assert_eq!(app.form.favourite_color, "");
    assert!(app.color_menu.is_none());
}

#[test]
fn test_typing_while_menu_open_is_ignored() {
    let mut app = create_test_app();
    app.focus.focus(ControlId::FavouriteColor);
    press(&mut app, key(KeyCode::Enter));

    let action = app.handle_input(char_key('x'));

    assert_eq!(action, None);
    assert_eq!(app.form.favourite_color, "");
}

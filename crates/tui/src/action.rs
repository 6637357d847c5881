//! Action protocol for the TUI event flow.
//!
//! Actions are the messages consumed by the app's reducer (`App::update`).
//! Raw terminal events enter as `Input`/`Resize`/`Tick`; the input layer
//! translates keys into the semantic variants below.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (see `app::update`)
//! - Key-to-action translation (see `app::input`)
//! - UI rendering (see `ui`)

use crossterm::event::KeyEvent;

use crate::fields::{FieldId, FieldValue};
use crate::focus::FocusDirection;

/// Messages driving the application state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw key event from the terminal, pending translation.
    Input(KeyEvent),
    /// Periodic UI tick (toast expiry).
    Tick,
    /// Terminal resize.
    Resize(u16, u16),
    /// Exit the application.
    Quit,

    /// A control changed one field's value.
    FieldChanged { field: FieldId, value: FieldValue },
    /// Move focus one step through the control list.
    FocusMoved(FocusDirection),

    /// Open the color option menu for the select control.
    ColorMenuOpened,
    /// Move the color menu highlight.
    ColorMenuMoved(FocusDirection),
    /// Commit the highlighted color and close the menu.
    ColorMenuConfirmed,
    /// Close the menu without changing the selection.
    ColorMenuCancelled,

    /// Cycle to the next color theme.
    ThemeCycled,
    /// Explicit submission of the form.
    SubmitRequested,
}

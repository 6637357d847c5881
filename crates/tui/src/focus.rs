//! Focus management for the form's controls.
//!
//! Provides a `FocusController` tracking which control has focus in the
//! form's flat control list, enabling arrow-key navigation between
//! interactive elements while skipping non-focusable grouping wrappers.

use crate::fields::{EMPLOYMENT_OPTIONS, FieldId};

/// One entry in the form's flat control list.
///
/// The list mirrors the order controls appear on screen, including the
/// radio group's non-focusable wrapper (the original form's fieldset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    FirstName,
    LastName,
    Email,
    Comments,
    IsFriendly,
    /// Grouping wrapper around the employment options. Never focusable.
    EmploymentGroup,
    /// One employment radio option, by index into `EMPLOYMENT_OPTIONS`.
    Employment(usize),
    FavouriteColor,
    Submit,
}

impl ControlId {
    /// Whether this entry can receive focus.
    pub fn is_focusable(self) -> bool {
        !matches!(self, Self::EmploymentGroup)
    }

    /// The text field this control edits, if it is a text control.
    pub fn text_field(self) -> Option<FieldId> {
        match self {
            Self::FirstName => Some(FieldId::FirstName),
            Self::LastName => Some(FieldId::LastName),
            Self::Email => Some(FieldId::Email),
            Self::Comments => Some(FieldId::Comments),
            _ => None,
        }
    }
}

/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Up,
    Down,
}

/// Tracks focus over an explicit, ordered control list.
///
/// Decoupled from the rendering tree: navigation is computed over this list
/// alone, so it is testable without a terminal.
#[derive(Debug, Clone)]
pub struct FocusController {
    order: Vec<ControlId>,
    current: usize,
}

impl FocusController {
    /// Build a controller over the given control order.
    ///
    /// Focus starts on the first focusable entry.
    pub fn new(order: Vec<ControlId>) -> Self {
        let current = order
            .iter()
            .position(|control| control.is_focusable())
            .unwrap_or(0);
        Self { order, current }
    }

    /// The canonical control order of the intake form.
    pub fn form_layout() -> Self {
        let mut order = vec![
            ControlId::FirstName,
            ControlId::LastName,
            ControlId::Email,
            ControlId::Comments,
            ControlId::IsFriendly,
            ControlId::EmploymentGroup,
        ];
        order.extend((0..EMPLOYMENT_OPTIONS.len()).map(ControlId::Employment));
        order.push(ControlId::FavouriteColor);
        order.push(ControlId::Submit);
        Self::new(order)
    }

    /// The currently focused control.
    pub fn current(&self) -> ControlId {
        self.order[self.current]
    }

    /// Check whether a specific control is focused.
    pub fn is_focused(&self, control: ControlId) -> bool {
        self.current() == control
    }

    /// All controls, in form order.
    pub fn controls(&self) -> &[ControlId] {
        &self.order
    }

    /// Move focus one step in the given direction.
    ///
    /// If the adjacent entry is a non-focusable grouping wrapper, skip one
    /// further position in the same direction. At the list boundaries, or
    /// when the skip runs off the end, focus is unchanged. Returns whether
    /// focus moved.
    pub fn step(&mut self, direction: FocusDirection) -> bool {
        let Some(mut target) = self.adjacent(self.current, direction) else {
            return false;
        };
        if !self.order[target].is_focusable() {
            match self.adjacent(target, direction) {
                Some(next) => target = next,
                None => return false,
            }
        }
        if !self.order[target].is_focusable() {
            return false;
        }
        self.current = target;
        true
    }

    /// Set focus to a specific control. Returns whether it was found and
    /// focusable.
    pub fn focus(&mut self, control: ControlId) -> bool {
        if !control.is_focusable() {
            return false;
        }
        match self.order.iter().position(|entry| *entry == control) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    fn adjacent(&self, from: usize, direction: FocusDirection) -> Option<usize> {
        match direction {
            FocusDirection::Down => {
                let next = from + 1;
                (next < self.order.len()).then_some(next)
            }
            FocusDirection::Up => from.checked_sub(1),
        }
    }
}

impl Default for FocusController {
    fn default() -> Self {
        Self::form_layout()
    }
}

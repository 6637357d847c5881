//! Form state store.
//!
//! Responsibilities:
//! - Hold the single consolidated record of all field values.
//! - Apply field changes through one entry point, one field at a time.
//!
//! Does NOT handle:
//! - Input interpretation (see `app::input`).
//! - Rendering (see `ui`); renderers read the state by reference.
//!
//! Invariants:
//! - Every field is always present; unset choice fields hold `""`.
//! - Mutation happens only through `apply`, called from the reducer.

use serde::Serialize;

use crate::fields::{FieldId, FieldValue};

/// The consolidated record of all field values for the widget.
///
/// Serializes with the wire spelling used by the submission snapshot
/// (`firstName`, `isFriendly`, `favouriteColor`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub comments: String,
    pub is_friendly: bool,
    pub employment: String,
    pub favourite_color: String,
}

impl FormState {
    /// Replace exactly one field, preserving all others.
    ///
    /// The field set is closed, so a value-shape mismatch (a `Flag` aimed at
    /// a text field) is unreachable from the UI; it is logged and dropped
    /// rather than panicking.
    pub fn apply(&mut self, field: FieldId, value: FieldValue) {
        match (field, value) {
            (FieldId::FirstName, FieldValue::Text(v)) => self.first_name = v,
            (FieldId::LastName, FieldValue::Text(v)) => self.last_name = v,
            (FieldId::Email, FieldValue::Text(v)) => self.email = v,
            (FieldId::Comments, FieldValue::Text(v)) => self.comments = v,
            (FieldId::IsFriendly, FieldValue::Flag(v)) => self.is_friendly = v,
            (FieldId::Employment, FieldValue::Text(v)) => self.employment = v,
            (FieldId::FavouriteColor, FieldValue::Text(v)) => self.favourite_color = v,
            (field, value) => {
                tracing::debug!(?field, ?value, "Ignoring value-shape mismatch for field");
            }
        }
    }

    /// Current value of a field, in change-event shape.
    pub fn value(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::FirstName => FieldValue::text(self.first_name.clone()),
            FieldId::LastName => FieldValue::text(self.last_name.clone()),
            FieldId::Email => FieldValue::text(self.email.clone()),
            FieldId::Comments => FieldValue::text(self.comments.clone()),
            FieldId::IsFriendly => FieldValue::flag(self.is_friendly),
            FieldId::Employment => FieldValue::text(self.employment.clone()),
            FieldId::FavouriteColor => FieldValue::text(self.favourite_color.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_all_empty() {
        let state = FormState::default();
        assert_eq!(state.first_name, "");
        assert_eq!(state.last_name, "");
        assert_eq!(state.email, "");
        assert_eq!(state.comments, "");
        assert!(!state.is_friendly);
        assert_eq!(state.employment, "");
        assert_eq!(state.favourite_color, "");
    }

    #[test]
    fn apply_replaces_only_the_targeted_field() {
        let mut state = FormState::default();
        state.apply(FieldId::FirstName, FieldValue::text("Ada"));

        let before = state.clone();
        state.apply(FieldId::Employment, FieldValue::text("part-time"));

        assert_eq!(state.employment, "part-time");
        assert_eq!(state.first_name, before.first_name);
        assert_eq!(state.last_name, before.last_name);
        assert_eq!(state.email, before.email);
        assert_eq!(state.comments, before.comments);
        assert_eq!(state.is_friendly, before.is_friendly);
        assert_eq!(state.favourite_color, before.favourite_color);
    }

    #[test]
    fn apply_checkbox_reads_the_flag() {
        let mut state = FormState::default();
        state.apply(FieldId::IsFriendly, FieldValue::flag(true));
        assert!(state.is_friendly);
        state.apply(FieldId::IsFriendly, FieldValue::flag(false));
        assert!(!state.is_friendly);
    }

    #[test]
    fn mismatched_value_shape_is_dropped() {
        let mut state = FormState::default();
        state.apply(FieldId::Email, FieldValue::flag(true));
        assert_eq!(state.email, "");

        state.apply(FieldId::IsFriendly, FieldValue::text("yes"));
        assert!(!state.is_friendly);
    }

    #[test]
    fn snapshot_serializes_with_wire_spelling() {
        let mut state = FormState::default();
        state.apply(FieldId::FirstName, FieldValue::text("Ada"));
        state.apply(FieldId::IsFriendly, FieldValue::flag(true));

        let snapshot = serde_json::to_value(&state).unwrap();
        assert_eq!(
            snapshot,
            serde_json::json!({
                "firstName": "Ada",
                "lastName": "",
                "email": "",
                "comments": "",
                "isFriendly": true,
                "employment": "",
                "favouriteColor": "",
            })
        );
    }

    #[test]
    fn value_round_trips_through_apply() {
        let mut state = FormState::default();
        state.apply(FieldId::Comments, FieldValue::text("hello\nworld"));
        assert_eq!(
            state.value(FieldId::Comments),
            FieldValue::text("hello\nworld")
        );
    }
}

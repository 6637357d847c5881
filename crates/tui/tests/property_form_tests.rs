//! Property-based tests for the form state store.
//!
//! These tests verify the store's no-cross-field-interference contract
//! using randomly generated edit sequences: after any edit, the targeted
//! field holds the new value and every other field is untouched.

use proptest::prelude::*;

use intake_tui::{FieldId, FieldValue, FormState};

const ALL_FIELDS: [FieldId; 7] = [
    FieldId::FirstName,
    FieldId::LastName,
    FieldId::Email,
    FieldId::Comments,
    FieldId::IsFriendly,
    FieldId::Employment,
    FieldId::FavouriteColor,
];

/// Strategy for one well-shaped edit (text to text fields, flag to the
/// checkbox, option values to the choice fields).
fn edit_strategy() -> impl Strategy<Value = (FieldId, FieldValue)> {
    let text_field = prop_oneof![
        Just(FieldId::FirstName),
        Just(FieldId::LastName),
        Just(FieldId::Email),
        Just(FieldId::Comments),
    ];
    let text_edit = (text_field, "[a-zA-Z0-9 @.\\-]{0,16}")
        .prop_map(|(field, value)| (field, FieldValue::Text(value)));

    let flag_edit =
        any::<bool>().prop_map(|value| (FieldId::IsFriendly, FieldValue::Flag(value)));

    let employment_edit = prop_oneof![
        Just("unemployed"),
        Just("part-time"),
        Just("full-time"),
        Just(""),
    ]
    .prop_map(|value| (FieldId::Employment, FieldValue::text(value)));

    let color_edit = prop_oneof![
        Just("red"),
        Just("orange"),
        Just("yellow"),
        Just("blue"),
        Just("green"),
        Just("indigo"),
        Just("violet"),
        Just(""),
    ]
    .prop_map(|value| (FieldId::FavouriteColor, FieldValue::text(value)));

    prop_oneof![text_edit, flag_edit, employment_edit, color_edit]
}

proptest! {
    #[test]
    fn edits_never_interfere_across_fields(
        edits in prop::collection::vec(edit_strategy(), 1..40)
    ) {
        let mut state = FormState::default();

        for (field, value) in edits {
            let before = state.clone();
            state.apply(field, value.clone());

            prop_assert_eq!(
                state.value(field),
                value,
                "the targeted field holds the written value"
            );
            for other in ALL_FIELDS {
                if other != field {
                    prop_assert_eq!(
                        state.value(other),
                        before.value(other),
                        "field {:?} changed while writing {:?}",
                        other,
                        field
                    );
                }
            }
        }
    }

    #[test]
    fn snapshot_always_has_every_field(
        edits in prop::collection::vec(edit_strategy(), 0..20)
    ) {
        let mut state = FormState::default();
        for (field, value) in edits {
            state.apply(field, value);
        }

        let snapshot = serde_json::to_value(&state).unwrap();
        let object = snapshot.as_object().unwrap();
        for field in ALL_FIELDS {
            prop_assert!(
                object.contains_key(field.name()),
                "snapshot missing {}",
                field.name()
            );
        }
        prop_assert_eq!(object.len(), ALL_FIELDS.len());
    }
}

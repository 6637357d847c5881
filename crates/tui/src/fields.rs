//! Field registry: the static descriptors the form is generated from.
//!
//! Responsibilities:
//! - Define the closed set of writable fields (`FieldId`) and their value
//!   shapes (`FieldValue`).
//! - Hold the immutable descriptor tables (text placeholders, radio options,
//!   color options) created at definition time and never mutated.
//!
//! Does NOT handle:
//! - Field values at runtime (see `form::FormState`).
//! - Focus order (see `focus`); the registry describes fields, not controls.

/// Identifier for one writable form field.
///
/// This is a compile-time-checked closed set: there is no way to address a
/// field the form does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Comments,
    IsFriendly,
    Employment,
    FavouriteColor,
}

impl FieldId {
    /// Wire name of the field, as it appears in the submission snapshot.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Comments => "comments",
            Self::IsFriendly => "isFriendly",
            Self::Employment => "employment",
            Self::FavouriteColor => "favouriteColor",
        }
    }
}

/// A value written to a field.
///
/// Text controls carry their full text; the checkbox carries its checked
/// state. Carrying the flag in the value replaces the original's
/// `isCheckbox` change-event discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn flag(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Descriptor for one single-line text input.
#[derive(Debug, Clone, Copy)]
pub struct TextField {
    pub field: FieldId,
    pub placeholder: &'static str,
}

/// The single-line text inputs, in form order.
pub const TEXT_FIELDS: [TextField; 3] = [
    TextField {
        field: FieldId::FirstName,
        placeholder: "First name",
    },
    TextField {
        field: FieldId::LastName,
        placeholder: "Last name",
    },
    TextField {
        field: FieldId::Email,
        placeholder: "Email",
    },
];

/// Placeholder for the multi-line comments control.
pub const COMMENTS_PLACEHOLDER: &str = "Any comments?";

/// Label for the friendliness checkbox.
pub const CHECKBOX_LABEL: &str = "Are you Friendly?";

/// One option of a single-choice control (radio button or select entry).
#[derive(Debug, Clone, Copy)]
pub struct ChoiceOption {
    /// Value written to the store when selected.
    pub value: &'static str,
    /// Label shown to the user.
    pub label: &'static str,
}

/// Legend of the employment radio group.
pub const EMPLOYMENT_LEGEND: &str = "Current employment status";

/// The employment radio options. Mutual exclusivity comes from all options
/// writing the same field.
pub const EMPLOYMENT_OPTIONS: [ChoiceOption; 3] = [
    ChoiceOption {
        value: "unemployed",
        label: "Unemployed",
    },
    ChoiceOption {
        value: "part-time",
        label: "Part-time",
    },
    ChoiceOption {
        value: "full-time",
        label: "Full-time",
    },
];

/// Non-selectable placeholder shown while no color is chosen.
pub const COLOR_PLACEHOLDER: &str = "-- Your favourite color --";

/// The favourite-color options.
pub const COLOR_OPTIONS: [ChoiceOption; 7] = [
    ChoiceOption {
        value: "red",
        label: "Red",
    },
    ChoiceOption {
        value: "orange",
        label: "Orange",
    },
    ChoiceOption {
        value: "yellow",
        label: "Yellow",
    },
    ChoiceOption {
        value: "blue",
        label: "Blue",
    },
    ChoiceOption {
        value: "green",
        label: "Green",
    },
    ChoiceOption {
        value: "indigo",
        label: "Indigo",
    },
    ChoiceOption {
        value: "violet",
        label: "Violet",
    },
];

/// Look up the display label for a stored color value.
pub fn color_label(value: &str) -> Option<&'static str> {
    COLOR_OPTIONS
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

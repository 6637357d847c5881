//! Editor widgets backing the text controls.
//!
//! Wraps tui-input and ratatui-textarea so the input layer can route
//! editing keys to the focused text control and read back the full value to
//! forward to the store. Enter never reaches these editors; the navigation
//! controller suppresses it first.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

use crate::fields::{COMMENTS_PLACEHOLDER, FieldId, TEXT_FIELDS};

/// Single-line input with placeholder support.
#[derive(Debug, Clone, Default)]
pub struct SingleLineInput {
    input: Input,
    placeholder: String,
}

impl SingleLineInput {
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            placeholder: placeholder.into(),
        }
    }

    /// Route an editing key to the underlying input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let req = match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            };
            if let Some(req) = req {
                self.input.handle(req);
            }
            return;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };
        if let Some(req) = req {
            self.input.handle(req);
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

/// Multi-line editor for the comments control.
#[derive(Default)]
pub struct MultiLineInput {
    textarea: tui_textarea::TextArea<'static>,
    placeholder: String,
}

impl MultiLineInput {
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_placeholder_text(placeholder.clone());
        Self {
            textarea,
            placeholder,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.textarea.input(key);
    }

    /// Full text, lines joined with `\n`.
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn set_value(&mut self, value: &str) {
        let lines: Vec<String> = value.lines().map(str::to_string).collect();
        let mut textarea = tui_textarea::TextArea::new(lines);
        textarea.set_placeholder_text(self.placeholder.clone());
        self.textarea = textarea;
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.is_empty())
    }

    pub fn inner_mut(&mut self) -> &mut tui_textarea::TextArea<'static> {
        &mut self.textarea
    }
}

/// The editors for all text controls, in one place.
pub struct Editors {
    pub first_name: SingleLineInput,
    pub last_name: SingleLineInput,
    pub email: SingleLineInput,
    pub comments: MultiLineInput,
}

impl Editors {
    pub fn new() -> Self {
        Self {
            first_name: SingleLineInput::with_placeholder(TEXT_FIELDS[0].placeholder),
            last_name: SingleLineInput::with_placeholder(TEXT_FIELDS[1].placeholder),
            email: SingleLineInput::with_placeholder(TEXT_FIELDS[2].placeholder),
            comments: MultiLineInput::with_placeholder(COMMENTS_PLACEHOLDER),
        }
    }

    /// Route a key to the editor of `field` and return the resulting value.
    ///
    /// Returns `None` for fields without an editor; callers resolve the
    /// field from `ControlId::text_field` first.
    pub fn apply_key(&mut self, field: FieldId, key: KeyEvent) -> Option<String> {
        match field {
            FieldId::FirstName => {
                self.first_name.handle_key(key);
                Some(self.first_name.value().to_string())
            }
            FieldId::LastName => {
                self.last_name.handle_key(key);
                Some(self.last_name.value().to_string())
            }
            FieldId::Email => {
                self.email.handle_key(key);
                Some(self.email.value().to_string())
            }
            FieldId::Comments => {
                self.comments.handle_key(key);
                Some(self.comments.value())
            }
            _ => None,
        }
    }

    /// Current editor value for a text field.
    pub fn value(&self, field: FieldId) -> Option<String> {
        match field {
            FieldId::FirstName => Some(self.first_name.value().to_string()),
            FieldId::LastName => Some(self.last_name.value().to_string()),
            FieldId::Email => Some(self.email.value().to_string()),
            FieldId::Comments => Some(self.comments.value()),
            _ => None,
        }
    }

    /// Overwrite an editor after a programmatic state change.
    pub fn set_value(&mut self, field: FieldId, value: &str) {
        match field {
            FieldId::FirstName => self.first_name.set_value(value),
            FieldId::LastName => self.last_name.set_value(value),
            FieldId::Email => self.email.set_value(value),
            FieldId::Comments => self.comments.set_value(value),
            _ => {}
        }
    }
}

impl Default for Editors {
    fn default() -> Self {
        Self::new()
    }
}

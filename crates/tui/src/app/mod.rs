//! Application state and event handling.
//!
//! Responsibilities:
//! - Own the form state, focus controller, editors, and transient UI state.
//! - Translate key events into Actions (`input`).
//! - Apply Actions to state (`update`).
//!
//! Does NOT handle:
//! - Rendering (see `ui`).
//! - Submission delivery (see `submit`; the runtime hands snapshots to the
//!   sink when `SubmitRequested` flows through the loop).

mod editors;
mod input;
mod update;

pub use editors::{Editors, MultiLineInput, SingleLineInput};

use intake_config::{ColorTheme, Theme, UiConfig};

use crate::focus::FocusController;
use crate::form::FormState;
use crate::ui::Toast;
use crate::ui::color_menu::ColorMenu;

/// Top-level application state.
pub struct App {
    /// The consolidated form record. Mutated only inside `update`.
    pub form: FormState,
    /// Focus over the flat control list.
    pub focus: FocusController,
    /// Editors backing the text controls.
    pub editors: Editors,
    /// Open color option menu, if any.
    pub color_menu: Option<ColorMenu>,
    /// Selected theme persona.
    pub color_theme: ColorTheme,
    /// Expanded runtime palette.
    pub theme: Theme,
    /// Transient feedback messages.
    pub toasts: Vec<Toast>,
    /// Number of submissions this session.
    pub submission_count: u64,
}

impl App {
    /// Create the app with all-empty form defaults.
    pub fn new(config: UiConfig) -> Self {
        Self {
            form: FormState::default(),
            focus: FocusController::form_layout(),
            editors: Editors::new(),
            color_menu: None,
            color_theme: config.theme,
            theme: Theme::from(config.theme),
            toasts: Vec::new(),
            submission_count: 0,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

//! Action handling: the reducer.
//!
//! Responsibilities:
//! - Apply Actions to app state, one at a time, in event order.
//!
//! Non-responsibilities:
//! - Does NOT create Actions (see `input`).
//! - Does NOT deliver submissions (the runtime owns the sink).
//!
//! Invariants:
//! - `FormState` is written only here, through `FormState::apply`.

use intake_config::Theme;

use crate::action::Action;
use crate::app::App;
use crate::fields::{FieldId, FieldValue};
use crate::ui::Toast;
use crate::ui::color_menu::ColorMenu;

impl App {
    /// Pure state mutation based on one Action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::FieldChanged { field, value } => {
                self.form.apply(field, value);
                self.sync_editor(field);
            }
            Action::FocusMoved(direction) => {
                self.focus.step(direction);
            }

            Action::ColorMenuOpened => {
                self.color_menu = Some(ColorMenu::for_value(&self.form.favourite_color));
            }
            Action::ColorMenuMoved(direction) => {
                if let Some(menu) = &mut self.color_menu {
                    menu.step(direction);
                }
            }
            Action::ColorMenuConfirmed => {
                if let Some(menu) = self.color_menu.take() {
                    let chosen = menu.highlighted_option();
                    self.form
                        .apply(FieldId::FavouriteColor, FieldValue::text(chosen.value));
                }
            }
            Action::ColorMenuCancelled => {
                self.color_menu = None;
            }

            Action::ThemeCycled => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from(self.color_theme);
                self.toasts
                    .push(Toast::info(format!("Theme: {}", self.color_theme)));
            }
            Action::SubmitRequested => {
                self.submission_count += 1;
                self.toasts.push(Toast::success("Form submitted"));
            }

            Action::Tick => {
                self.toasts.retain(|toast| !toast.is_expired());
            }
            // Raw events are translated upstream; Quit terminates the loop
            // before reaching the reducer.
            Action::Input(_) | Action::Resize(_, _) | Action::Quit => {}
        }
    }

    /// Keep the text editor of `field` aligned after a store write.
    ///
    /// During typing the editor is already the source of the value, so this
    /// only rebuilds the editor on programmatic changes (tests, menus).
    fn sync_editor(&mut self, field: FieldId) {
        if let FieldValue::Text(expected) = self.form.value(field)
            && let Some(current) = self.editors.value(field)
            && current != expected
        {
            self.editors.set_value(field, &expected);
        }
    }
}

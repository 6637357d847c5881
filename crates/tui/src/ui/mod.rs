//! UI rendering for the intake form.

pub mod color_menu;
pub mod controls;
pub mod theme;
pub mod toast;

pub use toast::{Toast, ToastLevel};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::fields::{CHECKBOX_LABEL, EMPLOYMENT_OPTIONS};
use crate::focus::ControlId;
use crate::ui::theme::ThemeExt;

/// Key hints shown in the footer.
const FOOTER_HINTS: &str =
    "↑/↓/Tab move · Enter toggle/open/submit · Space select · Ctrl+T theme · Esc quit";

/// Render one frame of the whole widget.
pub fn render(f: &mut Frame, app: &mut App) {
    let theme = app.theme;
    let area = f.area();

    let outer = Block::default()
        .title(" Intake ")
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title_style(theme.title());
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let radio_height = EMPLOYMENT_OPTIONS.len() as u16 + 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // first name
            Constraint::Length(1), // last name
            Constraint::Length(1), // email
            Constraint::Length(4), // comments
            Constraint::Length(1), // checkbox
            Constraint::Length(radio_height),
            Constraint::Length(1), // color select
            Constraint::Length(1), // submit
            Constraint::Min(0),
            Constraint::Length(1), // footer
        ])
        .split(inner);

    let current = app.focus.current();

    controls::render_text_input(
        f,
        rows[0],
        &app.editors.first_name,
        current == ControlId::FirstName,
        &theme,
    );
    controls::render_text_input(
        f,
        rows[1],
        &app.editors.last_name,
        current == ControlId::LastName,
        &theme,
    );
    controls::render_text_input(
        f,
        rows[2],
        &app.editors.email,
        current == ControlId::Email,
        &theme,
    );
    controls::render_comments(
        f,
        rows[3],
        &mut app.editors.comments,
        current == ControlId::Comments,
        &theme,
    );
    controls::render_checkbox(
        f,
        rows[4],
        CHECKBOX_LABEL,
        app.form.is_friendly,
        current == ControlId::IsFriendly,
        &theme,
    );
    controls::render_radio_group(
        f,
        rows[5],
        &app.form,
        controls::focused_radio(current),
        &theme,
    );
    controls::render_select(
        f,
        rows[6],
        &app.form,
        current == ControlId::FavouriteColor,
        &theme,
    );
    controls::render_submit(f, rows[7], current == ControlId::Submit, &theme);

    f.render_widget(
        Paragraph::new(FOOTER_HINTS).style(theme.text_dim()),
        rows[9],
    );

    if let Some(menu) = &app.color_menu {
        color_menu::render_color_menu(f, menu, &theme);
    }

    toast::render_toasts(f, &app.toasts, &theme);
}

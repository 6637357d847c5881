//! Presentational builders for the form's controls.
//!
//! Responsibilities:
//! - Render each control from the shared state and focus position.
//!
//! Does NOT handle:
//! - Input interpretation (see `app::input`).
//! - Layout of the form as a whole (see `ui::render`).
//!
//! Invariants:
//! - Renderers read state; they never write it.
//! - Selected markers are derived from `FormState` alone, so exactly one or
//!   zero radio rows can show as selected.

use intake_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{MultiLineInput, SingleLineInput};
use crate::fields::{COLOR_PLACEHOLDER, EMPLOYMENT_LEGEND, EMPLOYMENT_OPTIONS, color_label};
use crate::focus::ControlId;
use crate::form::FormState;
use crate::ui::theme::ThemeExt;

/// Width of the focus marker column.
const MARKER_WIDTH: u16 = 2;

fn marker(focused: bool) -> &'static str {
    if focused { "› " } else { "  " }
}

/// Single-line text control. Mandatory; shows its placeholder while empty.
pub fn render_text_input(f: &mut Frame, area: Rect, input: &SingleLineInput, focused: bool, theme: &Theme) {
    let value_span = if input.is_empty() {
        Span::styled(format!("{} *", input.placeholder()), theme.text_dim())
    } else {
        Span::styled(input.value().to_string(), theme.text())
    };
    let line = Line::from(vec![Span::styled(marker(focused), theme.title()), value_span]);
    f.render_widget(Paragraph::new(line), area);

    if focused {
        let cursor_x = area.x + MARKER_WIDTH + input.cursor() as u16;
        f.set_cursor_position(ratatui::layout::Position::new(
            cursor_x.min(area.right().saturating_sub(1)),
            area.y,
        ));
    }
}

/// Multi-line comments control.
pub fn render_comments(f: &mut Frame, area: Rect, comments: &mut MultiLineInput, focused: bool, theme: &Theme) {
    let border = if focused {
        theme.border_focused()
    } else {
        theme.border()
    };
    let textarea = comments.inner_mut();
    textarea.set_block(
        Block::default()
            .title("Comments")
            .borders(Borders::ALL)
            .border_style(border),
    );
    textarea.set_style(theme.text());
    textarea.set_cursor_style(if focused {
        theme.highlight()
    } else {
        theme.text()
    });
    f.render_widget(&*textarea, area);
}

/// Boolean checkbox control.
pub fn render_checkbox(f: &mut Frame, area: Rect, label: &str, checked: bool, focused: bool, theme: &Theme) {
    let box_mark = if checked { "[x]" } else { "[ ]" };
    let line = Line::from(vec![
        Span::styled(marker(focused), theme.title()),
        Span::styled(box_mark, if focused { theme.border_focused() } else { theme.text() }),
        Span::raw(" "),
        Span::styled(label.to_string(), theme.text()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// The employment radio group: legend plus one row per option.
pub fn render_radio_group(f: &mut Frame, area: Rect, form: &FormState, focused_option: Option<usize>, theme: &Theme) {
    let block = Block::default()
        .title(EMPLOYMENT_LEGEND)
        .borders(Borders::ALL)
        .border_style(if focused_option.is_some() {
            theme.border_focused()
        } else {
            theme.border()
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = EMPLOYMENT_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let focused = focused_option == Some(i);
            let selected = form.employment == option.value;
            let radio = if selected { "(•)" } else { "( )" };
            Line::from(vec![
                Span::styled(marker(focused), theme.title()),
                Span::styled(radio, if focused { theme.border_focused() } else { theme.text() }),
                Span::raw(" "),
                Span::styled(option.label, theme.text()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

/// Closed color select. Shows the dim placeholder until a color is chosen.
pub fn render_select(f: &mut Frame, area: Rect, form: &FormState, focused: bool, theme: &Theme) {
    let value_span = match color_label(&form.favourite_color) {
        Some(label) => Span::styled(label, theme.text()),
        None => Span::styled(format!("{COLOR_PLACEHOLDER} *"), theme.text_dim()),
    };
    let line = Line::from(vec![
        Span::styled(marker(focused), theme.title()),
        Span::styled("Colour: ", theme.text_dim()),
        value_span,
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// The submit control.
pub fn render_submit(f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
    let style = if focused { theme.highlight() } else { theme.text() };
    let line = Line::from(vec![
        Span::styled(marker(focused), theme.title()),
        Span::styled("[ Submit ]", style),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Focused radio option index, if focus sits inside the group.
pub fn focused_radio(current: ControlId) -> Option<usize> {
    match current {
        ControlId::Employment(index) => Some(index),
        _ => None,
    }
}

//! The color select's option menu.
//!
//! The closed select control shows a placeholder until a color is chosen;
//! activating it opens this modal menu. The placeholder itself is not an
//! option here, so the menu cannot produce an "unselected" value — the
//! terminal analog of a required select.

use intake_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::fields::{COLOR_OPTIONS, ChoiceOption};
use crate::focus::FocusDirection;
use crate::ui::theme::ThemeExt;

/// State of the open color menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMenu {
    highlighted: usize,
}

impl ColorMenu {
    /// Open the menu with the current selection highlighted, or the first
    /// option when nothing is selected yet.
    pub fn for_value(current: &str) -> Self {
        let highlighted = COLOR_OPTIONS
            .iter()
            .position(|option| option.value == current)
            .unwrap_or(0);
        Self { highlighted }
    }

    /// Move the highlight, clamped at the ends.
    pub fn step(&mut self, direction: FocusDirection) {
        match direction {
            FocusDirection::Up => self.highlighted = self.highlighted.saturating_sub(1),
            FocusDirection::Down => {
                if self.highlighted + 1 < COLOR_OPTIONS.len() {
                    self.highlighted += 1;
                }
            }
        }
    }

    /// The currently highlighted option.
    pub fn highlighted_option(&self) -> ChoiceOption {
        COLOR_OPTIONS[self.highlighted]
    }

    /// Index of the highlighted option.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }
}

/// Popup width as a percentage of the screen.
const MENU_WIDTH_PERCENT: u16 = 40;
/// Popup height as a percentage of the screen; tall enough for all options
/// on a conventional 24-row terminal.
const MENU_HEIGHT_PERCENT: u16 = 50;

/// Render the menu as a centered modal over the form.
pub fn render_color_menu(f: &mut Frame, menu: &ColorMenu, theme: &Theme) {
    let area = centered_rect(MENU_WIDTH_PERCENT, MENU_HEIGHT_PERCENT, f.area());

    f.render_widget(Clear, area);

    let lines: Vec<Line> = COLOR_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if i == menu.highlighted() {
                theme.highlight()
            } else {
                theme.text()
            };
            Line::from(Span::styled(format!(" {} ", option.label), style))
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title("Favourite color")
                .borders(Borders::ALL)
                .border_style(theme.border_focused()),
        ),
        area,
    );
}

/// Create a centered rectangle with the given percentage of the screen size.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

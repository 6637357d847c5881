//! Style builders on top of `intake_config::Theme`.
//!
//! Extends the config palette with ergonomic helpers for building ratatui
//! `Style` objects consistently across the UI.

use intake_config::Theme;
use ratatui::style::{Modifier, Style};

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Base text style.
    fn text(&self) -> Style;
    /// Dimmed text (placeholders, hints).
    fn text_dim(&self) -> Style;
    /// Title style (accent + bold).
    fn title(&self) -> Style;
    /// Border style.
    fn border(&self) -> Style;
    /// Border style when focused.
    fn border_focused(&self) -> Style;
    /// Highlight/selection style.
    fn highlight(&self) -> Style;
    /// Success style.
    fn success(&self) -> Style;
    /// Warning style.
    fn warning(&self) -> Style;
    /// Error style.
    fn error(&self) -> Style;
    /// Info style.
    fn info(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }
}

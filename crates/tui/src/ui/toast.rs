//! Toast notifications for transient feedback.
//!
//! Toasts stack in the bottom-right corner, each with a unique id, a
//! severity level, and an automatic expiration time. Expiry is driven by
//! the UI tick.

use std::time::{Duration, Instant};

use intake_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
};
use uuid::Uuid;

use crate::ui::theme::ThemeExt;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
}

impl ToastLevel {
    /// Display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
        }
    }

    /// Time-to-live before auto-expiry.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(5)
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Warning)
    }

    /// Whether this toast has outlived its TTL.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Render the toast stack in the bottom-right corner.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let size = f.area();
    const TOAST_HEIGHT: u16 = 3;
    const TOAST_WIDTH: u16 = 34;

    for (i, toast) in toasts.iter().rev().enumerate() {
        let offset = (i as u16 + 1) * TOAST_HEIGHT;
        if offset > size.height || size.width < TOAST_WIDTH {
            break;
        }
        let area = Rect {
            x: size.width.saturating_sub(TOAST_WIDTH),
            y: size.height.saturating_sub(offset),
            width: TOAST_WIDTH.min(size.width),
            height: TOAST_HEIGHT,
        };

        let style = match toast.level {
            ToastLevel::Info => theme.info(),
            ToastLevel::Success => theme.success(),
            ToastLevel::Warning => theme.warning(),
        };

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(toast.message.as_str()).style(theme.text()).block(
                Block::default()
                    .title(toast.level.label())
                    .borders(Borders::ALL)
                    .border_style(style),
            ),
            area,
        );
    }
}

//! Configuration management for Intake TUI.
//!
//! This crate provides the user-facing configuration surface: theme
//! selection, UI tick rate, and the environment-variable loader. Nothing in
//! here is persisted back to disk; the form widget itself is ephemeral.

mod loader;
pub mod types;

pub use loader::{ConfigError, load_dotenv};
pub use types::{ColorTheme, Theme, UiConfig};

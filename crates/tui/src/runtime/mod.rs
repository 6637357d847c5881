//! Runtime infrastructure for the TUI.
//!
//! This module contains what the event loop needs around it:
//! - Terminal state management (`TerminalGuard`)
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `ui` and `app`).

pub mod terminal;

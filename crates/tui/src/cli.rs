//! Command-line argument parsing for intake-tui.
//!
//! Responsibilities:
//! - Define the CLI argument structure using clap derive macros.
//! - Resolve the effective `UiConfig` from CLI args and environment.
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - Configuration precedence: CLI args > env vars > defaults.

use std::path::PathBuf;

use clap::Parser;
use intake_config::{ConfigError, UiConfig};

/// Command-line arguments for intake-tui.
#[derive(Debug, Parser)]
#[command(
    name = "intake-tui",
    about = "Terminal intake form",
    version,
    after_help = "Examples:\n  intake-tui\n  intake-tui --theme dark\n  intake-tui --log-dir /var/log/intake-tui --tick-ms 100\n"
)]
pub struct Cli {
    /// Color theme (default, light, dark, high_contrast)
    #[arg(long, short = 't')]
    pub theme: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// UI tick interval in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

impl Cli {
    /// Layer CLI values over the environment-resolved configuration.
    pub fn resolve_config(&self) -> Result<UiConfig, ConfigError> {
        let mut config = UiConfig::from_env()?;
        if let Some(theme) = &self.theme {
            config.theme = theme.parse()?;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        Ok(config.sanitize())
    }
}

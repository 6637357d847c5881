//! Environment-based configuration loading.
//!
//! Responsibilities:
//! - Load `.env` files into the process environment at startup.
//! - Resolve `UiConfig` from `INTAKE_*` environment variables.
//!
//! Does NOT handle:
//! - CLI argument parsing (the binary layers CLI values on top).
//! - Any on-disk persistence; configuration is read-only input.
//!
//! Precedence (applied by the caller): CLI args > env vars > defaults.

use std::env;

use crate::types::UiConfig;

/// Environment variable selecting the color theme.
pub const ENV_THEME: &str = "INTAKE_THEME";
/// Environment variable overriding the UI tick interval in milliseconds.
pub const ENV_TICK_MS: &str = "INTAKE_TICK_MS";

/// Errors produced while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown theme '{value}' (expected default, light, dark, or high_contrast)")]
    InvalidTheme { value: String },

    #[error("invalid tick interval '{value}': {source}")]
    InvalidTickMs {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Load `.env` from the working directory, if present.
///
/// Missing files are fine; malformed files are reported so a typo does not
/// silently drop the whole environment overlay.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env file: {e}"),
    }
}

impl UiConfig {
    /// Resolve configuration from the environment, starting from defaults.
    ///
    /// Unset variables keep their default value; set-but-invalid variables
    /// are an error, not a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(ENV_THEME) {
            config.theme = raw.parse()?;
        }

        if let Ok(raw) = env::var(ENV_TICK_MS) {
            config.tick_ms = raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidTickMs { value: raw, source })?;
        }

        Ok(config.sanitize())
    }
}

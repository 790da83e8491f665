//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8000"
//! export RUST_LOG="info"
//! export LOG_FORMAT="json"
//! export SLUG_LENGTH="8"
//! ```
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SLUG_LENGTH` - Length of generated slugs (default: 6, range: 4-22)

use anyhow::{Context, Result};
use std::env;

use crate::utils::random_slug::{DEFAULT_SLUG_LENGTH, MAX_SLUG_LENGTH, MIN_SLUG_LENGTH};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Length of slugs produced by the default generator.
    pub slug_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            slug_length: DEFAULT_SLUG_LENGTH,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SLUG_LENGTH` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let slug_length = match env::var("SLUG_LENGTH") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("SLUG_LENGTH must be a number, got '{}'", v))?,
            Err(_) => defaults.slug_length,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            slug_length,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `slug_length` is outside the generator's supported range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(MIN_SLUG_LENGTH..=MAX_SLUG_LENGTH).contains(&self.slug_length) {
            anyhow::bail!(
                "SLUG_LENGTH must be between {} and {}, got {}",
                MIN_SLUG_LENGTH,
                MAX_SLUG_LENGTH,
                self.slug_length
            );
        }

        Ok(())
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Slug length: {}", self.slug_length);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

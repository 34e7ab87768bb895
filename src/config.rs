//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the bot
//! connects to Discord.
//!
//! ```bash
//! export DISCORD_TOKEN="..."
//! export DOMAINS_FILE="/var/lib/archive-link-bot/domains.json"
//! ```
//!
//! ## Required Variables
//!
//! - `DISCORD_TOKEN` - Bot authentication token
//!
//! ## Optional Variables
//!
//! - `DOMAINS_FILE` - Monitored domain list (default: `./domains.json`)
//! - `ARCHIVE_PREFIX` - Prefix prepended to links (default: `http://archive.ph/newest/`)
//! - `LOG_MESSAGES` - Log inbound message contents at debug level (default: `false`)
//! - `FLAVOR_TEXT` - Add a random phrase to automatic replies (default: `false`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::application::services::DEFAULT_ARCHIVE_PREFIX;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DOMAINS_FILE: &str = "./domains.json";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub domains_file: PathBuf,
    pub archive_prefix: String,
    /// When true, the content of every inbound message is logged at debug level.
    pub log_messages: bool,
    /// When true, automatic replies start with a randomly chosen phrase.
    pub flavor_text: bool,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DISCORD_TOKEN` is missing.
    pub fn from_env() -> Result<Self> {
        let discord_token = env::var("DISCORD_TOKEN").context("DISCORD_TOKEN must be set")?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            discord_token,
            domains_file: Self::load_domains_file(),
            archive_prefix: Self::load_archive_prefix(),
            log_messages: load_flag("LOG_MESSAGES"),
            flavor_text: load_flag("FLAVOR_TEXT"),
            log_level,
            log_format,
        })
    }

    /// Resolves the domain list location from `DOMAINS_FILE`.
    pub fn load_domains_file() -> PathBuf {
        env::var("DOMAINS_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOMAINS_FILE))
    }

    /// Resolves the rewrite prefix from `ARCHIVE_PREFIX`.
    pub fn load_archive_prefix() -> String {
        env::var("ARCHIVE_PREFIX")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ARCHIVE_PREFIX.to_string())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `discord_token` is empty
    /// - `archive_prefix` is not an `http://` or `https://` URL prefix
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.discord_token.trim().is_empty() {
            anyhow::bail!("DISCORD_TOKEN must not be empty");
        }

        if !self.archive_prefix.starts_with("http://") && !self.archive_prefix.starts_with("https://")
        {
            anyhow::bail!(
                "ARCHIVE_PREFIX must start with 'http://' or 'https://', got '{}'",
                self.archive_prefix
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Discord token: {}", mask_token(&self.discord_token));
        tracing::info!("  Domains file: {}", self.domains_file.display());
        tracing::info!("  Archive prefix: {}", self.archive_prefix);
        tracing::info!("  Message logging: {}", self.log_messages);
        tracing::info!("  Flavor text: {}", self.flavor_text);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn load_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

/// Masks a secret token for logging, keeping only its first four characters.
///
/// - `abcd1234efgh` → `abcd***`
/// - `abc` → `***`
fn mask_token(token: &str) -> String {
    if token.chars().count() <= 8 {
        return "***".to_string();
    }
    let visible: String = token.chars().take(4).collect();
    format!("{visible}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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

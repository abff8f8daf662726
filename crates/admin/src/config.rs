//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ADMIN_SEED_PATH` - Seed file (`.json`, `.yaml` or `.yml`) loaded into the store
//! - `ADMIN_PAGE_SIZE` - Default rows per list page, 1 to 100 (default: 10)
//! - `ADMIN_LOCALE` - Label language, `pt-BR` or `en` (default: pt-BR)
//! - `ADMIN_CURRENCY` - Display currency, `BRL`, `USD` or `EUR` (default: BRL)
//! - `ADMIN_LOG_FORMAT` - `text` or `json` (default: text)

use std::path::PathBuf;
use std::str::FromStr;

use magnet_kit_core::CurrencyCode;
use thiserror::Error;

use crate::listing::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::locale::Locale;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event, for log shippers.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected text or json, got {s}")),
        }
    }
}

/// Admin application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Seed file to load into the store
    pub seed_path: Option<PathBuf>,
    /// Default rows per list page
    pub page_size: usize,
    /// Language for labels, month names and tooltips
    pub locale: Locale,
    /// Currency used when formatting amounts
    pub currency: CurrencyCode,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::default(),
            currency: CurrencyCode::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed_path = get_optional(&lookup, "ADMIN_SEED_PATH").map(PathBuf::from);

        let page_size: usize = parse_or_default(&lookup, "ADMIN_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(ConfigError::InvalidEnvVar(
                "ADMIN_PAGE_SIZE".to_string(),
                format!("must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"),
            ));
        }

        let locale = parse_or_default(&lookup, "ADMIN_LOCALE", Locale::default())?;
        let currency = parse_or_default(&lookup, "ADMIN_CURRENCY", CurrencyCode::default())?;
        let log_format = parse_or_default(&lookup, "ADMIN_LOG_FORMAT", LogFormat::default())?;

        Ok(Self {
            seed_path,
            page_size,
            locale,
            currency,
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating blank values as unset.
fn get_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

/// Parse a variable, falling back to `default` when unset.
fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional(lookup, key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

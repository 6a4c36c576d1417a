//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_DIR` - Directory holding the durable cart slot (default: .barco)
//! - `CART_STORAGE_KEY` - Slot name the cart is saved under (default: cart)
//! - `STORE_CURRENCY` - ISO 4217 code used for display (default: UAH)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;

use barco_core::CurrencyCode;
use thiserror::Error;

use crate::cart::{CartPersistence, DEFAULT_SLOT_KEY};
use crate::storage::FileStore;

const DEFAULT_STORAGE_DIR: &str = ".barco";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory holding the slot files
    pub storage_dir: PathBuf,
    /// Slot key the cart is stored under
    pub storage_key: String,
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., production, staging)
    pub sentry_environment: Option<String>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            storage_key: DEFAULT_SLOT_KEY.to_string(),
            currency: CurrencyCode::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl CartConfig {
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

        let storage_dir =
            PathBuf::from(get_env_or_default("CART_STORAGE_DIR", DEFAULT_STORAGE_DIR));
        let storage_key =
            parse_storage_key(&get_env_or_default("CART_STORAGE_KEY", DEFAULT_SLOT_KEY))?;
        let currency = get_env_or_default("STORE_CURRENCY", CurrencyCode::default().code())
            .parse::<CurrencyCode>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STORE_CURRENCY".to_string(), e.to_string())
            })?;

        Ok(Self {
            storage_dir,
            storage_key,
            currency,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// File-backed persistence for the configured slot.
    #[must_use]
    pub fn persistence(&self) -> CartPersistence<FileStore> {
        CartPersistence::with_key(
            FileStore::new(&self.storage_dir),
            self.storage_key.as_str(),
        )
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Validate a slot key. It becomes a file name, so path separators are refused.
fn parse_storage_key(value: &str) -> Result<String, ConfigError> {
    let key = value.trim();
    if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
        return Err(ConfigError::InvalidEnvVar(
            "CART_STORAGE_KEY".to_string(),
            format!("'{value}' is not a valid slot name"),
        ));
    }
    Ok(key.to_string())
}

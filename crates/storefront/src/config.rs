//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BRANDSTORE_DATA_DIR` - Directory for persisted local state (default: `.brandstore`)
//! - `BRANDSTORE_CATALOG_PATH` - Catalog export JSON file
//! - `BRANDSTORE_TAX_RATE` - Tax as a fraction of the subtotal (default: 0.02)
//! - `BRANDSTORE_DELIVERY_FEE` - Flat delivery fee (default: 10)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::cart::CheckoutPolicy;

const DEFAULT_DATA_DIR: &str = ".brandstore";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory backing the local key-value store
    pub data_dir: PathBuf,
    /// Catalog export to browse and search
    pub catalog_path: Option<PathBuf>,
    /// Tax and delivery applied at checkout
    pub checkout: CheckoutPolicy,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
            checkout: CheckoutPolicy::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CheckoutPolicy::default();

        let data_dir = lookup("BRANDSTORE_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let catalog_path = lookup("BRANDSTORE_CATALOG_PATH").map(PathBuf::from);
        let tax_rate = parse_or_default(&lookup, "BRANDSTORE_TAX_RATE", defaults.tax_rate)?;
        let delivery_fee =
            parse_or_default(&lookup, "BRANDSTORE_DELIVERY_FEE", defaults.delivery_fee)?;

        if tax_rate.is_sign_negative() {
            return Err(ConfigError::InvalidEnvVar(
                "BRANDSTORE_TAX_RATE".to_string(),
                "must not be negative".to_string(),
            ));
        }
        if delivery_fee.is_sign_negative() {
            return Err(ConfigError::InvalidEnvVar(
                "BRANDSTORE_DELIVERY_FEE".to_string(),
                "must not be negative".to_string(),
            ));
        }

        Ok(Self {
            data_dir,
            catalog_path,
            checkout: CheckoutPolicy {
                tax_rate,
                delivery_fee,
            },
        })
    }

    /// The catalog path, or an error naming the variable to set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if no catalog path is configured.
    pub fn require_catalog_path(&self) -> Result<&PathBuf, ConfigError> {
        self.catalog_path
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar("BRANDSTORE_CATALOG_PATH".to_string()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional decimal variable, falling back to `default` when unset.
fn parse_or_default<F>(lookup: &F, key: &str, default: Decimal) -> Result<Decimal, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(Ok(default), |raw| {
        Decimal::from_str(raw.trim())
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

//! Unified error handling.
//!
//! Each concern has its own error enum next to its code; `AppError` gathers
//! them for callers (such as the CLI) that drive several concerns at once.

use thiserror::Error;

use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Local store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration is missing or invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Output could not be written.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad input from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether the error came from the local store, directly or through the
    /// cart. The cart stays at its last written state; callers may retry on
    /// the next user action.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::Storage(_) | Self::Cart(CartError::Storage(_))
        )
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Áo".to_string());
        assert_eq!(err.to_string(), "Not found: Áo");

        let err = AppError::BadRequest("invalid size".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid size");

        let err = AppError::from(CartError::IndexOutOfRange { index: 3, len: 1 });
        assert_eq!(
            err.to_string(),
            "Cart error: Cart index 3 out of range (cart has 1 lines)"
        );

        let err = AppError::from(CartError::AmountOverflow);
        assert_eq!(err.to_string(), "Cart error: Cart amount overflowed");
    }

    #[test]
    fn test_is_storage() {
        let unavailable = || StorageError::Unavailable("disk full".to_string());
        assert!(AppError::from(unavailable()).is_storage());
        assert!(AppError::from(CartError::from(unavailable())).is_storage());
        assert!(!AppError::from(CartError::InvalidQuantity).is_storage());
        assert!(!AppError::from(std::io::Error::other("broken pipe")).is_storage());
    }
}

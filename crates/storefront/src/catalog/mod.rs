//! Catalog collaborator.
//!
//! The catalog is owned by a remote document store. Screens ask it for
//! products by category (or all of them), recommended products, categories
//! and banners, and feed the resulting list into [`crate::search`].
//!
//! [`JsonCatalog`] serves the same queries from a document-store export,
//! which is what the CLI and the tests run against.

mod json;

pub use json::JsonCatalog;

use brandstore_core::{BannerRecord, CategoryQuery, CategoryRecord, ProductRecord};
use thiserror::Error;

/// Errors raised while loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read access to catalog records.
pub trait Catalog {
    /// Products in the queried category, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read.
    fn items(&self, query: &CategoryQuery) -> Result<Vec<ProductRecord>, CatalogError>;

    /// Products flagged as recommended.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read.
    fn popular(&self) -> Result<Vec<ProductRecord>, CatalogError>;

    /// All categories.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read.
    fn categories(&self) -> Result<Vec<CategoryRecord>, CatalogError>;

    /// Home-screen banners.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read.
    fn banners(&self) -> Result<Vec<BannerRecord>, CatalogError>;
}

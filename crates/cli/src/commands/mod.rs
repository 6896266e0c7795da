//! Command implementations.
//!
//! Every command writes its listing to stdout and logs progress through
//! `tracing`, which the binary routes to stderr.

pub mod cart;
pub mod catalog;
pub mod search;

use std::io::Write;

use brandstore_core::{Price, ProductRecord};
use brandstore_storefront::catalog::JsonCatalog;
use brandstore_storefront::config::StorefrontConfig;
use brandstore_storefront::storage::FileStore;
use brandstore_storefront::{CartStore, Result};

/// Shared state for one CLI invocation.
pub struct Context {
    pub config: StorefrontConfig,
    pub cart: CartStore<FileStore>,
}

impl Context {
    /// Load configuration and open the cart store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the environment is invalid.
    pub fn from_env() -> Result<Self> {
        let config = StorefrontConfig::from_env()?;
        tracing::debug!(?config, "Loaded configuration");
        let cart = CartStore::new(FileStore::new(&config.data_dir));
        Ok(Self { config, cart })
    }

    /// Load the configured catalog export.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if no catalog path is set, or
    /// `AppError::Catalog` if it cannot be loaded.
    pub fn catalog(&self) -> Result<JsonCatalog> {
        let path = self.config.require_catalog_path()?;
        Ok(JsonCatalog::from_path(path)?)
    }
}

/// Write one product per line: title, category and price.
fn write_products<'a, W, I>(out: &mut W, products: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a ProductRecord>,
{
    let mut count = 0;
    for product in products {
        writeln!(
            out,
            "{:<40} {:<12} {:>14}",
            product.title,
            product.category_id,
            Price::vnd(product.price).display()
        )?;
        count += 1;
    }
    Ok(count)
}

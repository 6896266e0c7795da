//! Catalog browsing commands.

use std::io::Write;

use brandstore_core::CategoryQuery;
use brandstore_storefront::catalog::Catalog;
use tracing::info;

use brandstore_storefront::Result;

use super::{Context, write_products};

/// List products in a category (`all` for every category).
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or output fails.
pub fn items(ctx: &Context, category: &str) -> Result<()> {
    let query: CategoryQuery = category.parse().unwrap_or_default();
    let items = ctx.catalog()?.items(&query)?;
    let count = write_products(&mut std::io::stdout().lock(), &items)?;
    info!(%query, count, "Listed catalog items");
    Ok(())
}

/// List recommended products.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or output fails.
pub fn popular(ctx: &Context) -> Result<()> {
    let items = ctx.catalog()?.popular()?;
    write_products(&mut std::io::stdout().lock(), &items)?;
    Ok(())
}

/// List categories.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or output fails.
pub fn categories(ctx: &Context) -> Result<()> {
    let categories = ctx.catalog()?.categories()?;
    let mut out = std::io::stdout().lock();
    for category in &categories {
        writeln!(out, "{:<12} {}", category.id, category.title)?;
    }
    Ok(())
}

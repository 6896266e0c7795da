//! Product search command.

use std::io::Write;

use brandstore_core::{CategoryQuery, PriceRange, ProductRecord};
use brandstore_storefront::catalog::Catalog;
use brandstore_storefront::{AppError, ProductFilter, Result};
use rust_decimal::Decimal;
use tracing::info;

use super::{Context, write_products};

const NO_MATCHES: &str = "No products found";

/// Search a category by keyword, then narrow by a price chip or explicit
/// bounds.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for an unknown chip label, or an
/// error if the catalog cannot be loaded or output fails.
pub fn run(
    ctx: &Context,
    keyword: &str,
    category: &str,
    range: Option<&str>,
    bounds: Option<(Decimal, Decimal)>,
) -> Result<()> {
    let query: CategoryQuery = category.parse().unwrap_or_default();
    let products = ctx.catalog()?.items(&query)?;

    let mut filter = ProductFilter::new(keyword);
    if let Some(label) = range {
        let preset = PriceRange::preset(label).ok_or_else(|| {
            let labels: Vec<_> = PriceRange::presets().into_iter().map(|r| r.label).collect();
            AppError::BadRequest(format!(
                "unknown price range {label:?}, expected one of: {}",
                labels.join(", ")
            ))
        })?;
        filter = filter.with_price_range(preset);
    } else if let Some((min, max)) = bounds {
        filter = filter.with_price_range(PriceRange::new(format!("{min} - {max}"), min, max));
    }

    let matches = filter.apply(&products);
    let count = write_matches(&mut std::io::stdout().lock(), &matches)?;
    info!(keyword, count, "Search complete");
    Ok(())
}

/// Write the matching products, or an empty-state line when there are none.
fn write_matches<W: Write>(out: &mut W, matches: &[&ProductRecord]) -> Result<usize> {
    if matches.is_empty() {
        writeln!(out, "{NO_MATCHES}")?;
        return Ok(0);
    }
    write_products(out, matches.iter().copied())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches_prints_empty_state() {
        let mut out = Vec::new();
        assert_eq!(write_matches(&mut out, &[]).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "No products found\n");
    }

    #[test]
    fn test_matches_are_listed() {
        let product = ProductRecord::new("Giày Nike Air", Decimal::new(1_250_000, 0));
        let mut out = Vec::new();
        assert_eq!(write_matches(&mut out, &[&product]).unwrap(), 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Giày Nike Air"));
        assert!(text.contains("1,250,000 ₫"));
        assert!(!text.contains(NO_MATCHES));
    }
}

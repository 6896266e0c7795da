//! Accent-insensitive product search.
//!
//! Search is a stable filter over an in-memory product list: a product
//! survives if the folded keyword is a substring of its folded title,
//! category id, or category title. Input order is kept and nothing is
//! re-ranked.
//!
//! Price filtering is a second, independent predicate applied after the
//! keyword match. [`ProductFilter`] composes the two in that order.

mod normalize;

pub use normalize::normalize;

use brandstore_core::{PriceRange, ProductRecord};
use tracing::instrument;

/// Keep the products matching `keyword` in any searchable field.
///
/// An empty keyword (exactly `""`, no trimming) returns every product in
/// input order.
#[instrument(skip(products), fields(candidates = products.len()))]
pub fn search<'a>(products: &'a [ProductRecord], keyword: &str) -> Vec<&'a ProductRecord> {
    if keyword.is_empty() {
        return products.iter().collect();
    }

    let needle = normalize(keyword);
    products
        .iter()
        .filter(|product| {
            normalize(&product.title).contains(&needle)
                || normalize(&product.category_id).contains(&needle)
                || normalize(&product.category_title).contains(&needle)
        })
        .collect()
}

/// A product list with its searchable fields folded once up front.
///
/// Gives the same results as [`search`] while avoiding re-folding every
/// product on each keystroke.
#[derive(Debug, Clone)]
pub struct SearchIndex<'a> {
    entries: Vec<IndexEntry<'a>>,
}

#[derive(Debug, Clone)]
struct IndexEntry<'a> {
    product: &'a ProductRecord,
    title: String,
    category_id: String,
    category_title: String,
}

impl<'a> SearchIndex<'a> {
    /// Fold every product's searchable fields.
    #[must_use]
    pub fn new(products: &'a [ProductRecord]) -> Self {
        let entries = products
            .iter()
            .map(|product| IndexEntry {
                product,
                title: normalize(&product.title),
                category_id: normalize(&product.category_id),
                category_title: normalize(&product.category_title),
            })
            .collect();
        Self { entries }
    }

    /// Number of indexed products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Products matching `keyword`, in input order.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<&'a ProductRecord> {
        if keyword.is_empty() {
            return self.entries.iter().map(|entry| entry.product).collect();
        }

        let needle = normalize(keyword);
        self.entries
            .iter()
            .filter(|entry| {
                entry.title.contains(&needle)
                    || entry.category_id.contains(&needle)
                    || entry.category_title.contains(&needle)
            })
            .map(|entry| entry.product)
            .collect()
    }
}

/// Keyword search followed by an optional price range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub keyword: String,
    pub price_range: Option<PriceRange>,
}

impl ProductFilter {
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            price_range: None,
        }
    }

    #[must_use]
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    /// Whether any predicate narrows the list.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.keyword.is_empty() || self.price_range.is_some()
    }

    /// Apply the keyword search, then the price range.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [ProductRecord]) -> Vec<&'a ProductRecord> {
        let matched = search(products, &self.keyword);
        match &self.price_range {
            Some(range) => range.filter(matched),
            None => matched,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(title: &str, category_id: &str, category_title: &str, price: i64) -> ProductRecord {
        ProductRecord {
            category_id: category_id.to_string(),
            category_title: category_title.to_string(),
            ..ProductRecord::new(title, Decimal::new(price, 0))
        }
    }

    fn titles(products: &[&ProductRecord]) -> Vec<String> {
        products.iter().map(|p| p.title.clone()).collect()
    }

    fn catalog() -> Vec<ProductRecord> {
        vec![
            product("Áo Adidas", "nike", "Giày", 300_000),
            product("Giày Puma RS-X", "puma", "Puma", 1_500_000),
            product("Áo khoác Gucci", "gucci", "Gucci", 6_000_000),
            product("Quần Nike", "nike", "Nike", 450_000),
        ]
    }

    #[test]
    fn test_matches_any_field() {
        let products = vec![product("Áo Adidas", "nike", "Giày", 1)];
        assert_eq!(search(&products, "nike").len(), 1);
        assert_eq!(search(&products, "giay").len(), 1);
        assert_eq!(search(&products, "ADIDAS").len(), 1);
        assert!(search(&products, "puma").is_empty());
    }

    #[test]
    fn test_empty_keyword_returns_everything() {
        let products = catalog();
        let found = search(&products, "");
        assert_eq!(found.len(), products.len());
        assert_eq!(titles(&found), products.iter().map(|p| p.title.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn test_whitespace_keyword_is_not_trimmed() {
        let products = vec![product("Áo", "x", "y", 1)];
        assert!(search(&products, " ").is_empty());
    }

    #[test]
    fn test_keeps_input_order() {
        let products = catalog();
        assert_eq!(titles(&search(&products, "ao")), vec!["Áo Adidas", "Áo khoác Gucci"]);
        assert_eq!(titles(&search(&products, "nike")), vec!["Áo Adidas", "Quần Nike"]);
    }

    #[test]
    fn test_accented_keyword_matches_plain_text() {
        let products = vec![product("Ao khoac", "x", "y", 1)];
        assert_eq!(search(&products, "Áo Khoác").len(), 1);
    }

    #[test]
    fn test_index_agrees_with_search() {
        let products = catalog();
        let index = SearchIndex::new(&products);
        assert_eq!(index.len(), 4);
        for keyword in ["", "ao", "nike", "GUCCI", "giày", "zzz", " "] {
            assert_eq!(index.search(keyword), search(&products, keyword), "keyword {keyword:?}");
        }
    }

    #[test]
    fn test_filter_applies_price_after_keyword() {
        let products = catalog();
        let filter = ProductFilter::new("áo")
            .with_price_range(PriceRange::new("r", Decimal::ZERO, Decimal::new(500_000, 0)));
        assert!(filter.is_active());
        assert_eq!(titles(&filter.apply(&products)), vec!["Áo Adidas"]);
    }

    #[test]
    fn test_filter_order_does_not_change_result() {
        let products = catalog();
        let range = PriceRange::new("r", Decimal::ZERO, Decimal::new(500_000, 0));

        let search_first = range.filter(search(&products, "áo"));
        let priced: Vec<ProductRecord> = range.filter(&products).into_iter().cloned().collect();
        let price_first = search(&priced, "áo");

        assert_eq!(titles(&search_first), titles(&price_first));
    }

    #[test]
    fn test_inactive_filter_is_passthrough() {
        let products = catalog();
        let filter = ProductFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&products).len(), products.len());
    }
}

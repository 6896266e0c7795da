//! Integration tests for catalog search and price filtering.

#![allow(clippy::unwrap_used)]

use brandstore_core::{CategoryQuery, PriceRange, ProductRecord};
use brandstore_integration_tests::catalog;
use brandstore_storefront::catalog::Catalog;
use brandstore_storefront::search::SearchIndex;
use brandstore_storefront::{ProductFilter, normalize, search};
use rust_decimal::Decimal;

fn titles(products: &[&ProductRecord]) -> Vec<String> {
    products.iter().map(|p| p.title.clone()).collect()
}

fn all_items() -> Vec<ProductRecord> {
    catalog().items(&CategoryQuery::All).unwrap()
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize("Áo khoác"), "ao khoac");
    assert_eq!(normalize("Đen"), "den");
}

#[test]
fn test_normalize_idempotent_over_catalog_text() {
    for product in all_items() {
        for field in [&product.title, &product.category_id, &product.category_title] {
            let once = normalize(field);
            assert_eq!(normalize(&once), once);
        }
    }
}

// =============================================================================
// Keyword Search
// =============================================================================

#[test]
fn test_or_across_fields() {
    let products = vec![ProductRecord {
        category_id: "nike".to_string(),
        category_title: "Giày".to_string(),
        ..ProductRecord::new("Áo Adidas", Decimal::ONE)
    }];

    assert_eq!(search(&products, "nike").len(), 1);
    assert_eq!(search(&products, "giay").len(), 1);
    assert_eq!(search(&products, "adidas").len(), 1);
}

#[test]
fn test_empty_keyword_passthrough() {
    let products = all_items();
    let found = search(&products, "");
    assert_eq!(found.len(), products.len());
    for (found, original) in found.iter().zip(&products) {
        assert!(std::ptr::eq(*found, original));
    }
}

#[test]
fn test_search_within_category() {
    let gucci = catalog()
        .items(&CategoryQuery::Category("gucci".to_string()))
        .unwrap();
    assert_eq!(titles(&search(&gucci, "den")), vec!["Túi Gucci Đen"]);
    assert!(search(&gucci, "nike").is_empty());
}

#[test]
fn test_no_match_is_empty_not_error() {
    let products = all_items();
    assert!(search(&products, "không có").is_empty());
}

#[test]
fn test_search_index_matches_free_function() {
    let products = all_items();
    let index = SearchIndex::new(&products);
    for keyword in ["", "ao", "ÁO", "gucci", "giay", "đen", "x"] {
        assert_eq!(titles(&index.search(keyword)), titles(&search(&products, keyword)));
    }
}

// =============================================================================
// Price Range Composition
// =============================================================================

#[test]
fn test_keyword_then_price() {
    let products = all_items();
    let filter = ProductFilter::new("áo")
        .with_price_range(PriceRange::new("r", Decimal::ZERO, Decimal::new(500_000, 0)));
    assert_eq!(titles(&filter.apply(&products)), vec!["Áo Adidas"]);
}

#[test]
fn test_composition_is_an_intersection() {
    let products = all_items();
    for range in PriceRange::presets() {
        for keyword in ["", "ao", "gucci", "nike"] {
            let search_first = range.filter(search(&products, keyword));

            let priced: Vec<ProductRecord> = range.filter(&products).into_iter().cloned().collect();
            let price_first = search(&priced, keyword);

            assert_eq!(
                titles(&search_first),
                titles(&price_first),
                "range {} keyword {keyword:?}",
                range.label
            );
        }
    }
}

#[test]
fn test_presets_over_catalog() {
    let products = all_items();
    let count = |label: &str| PriceRange::preset(label).unwrap().filter(&products).len();

    assert_eq!(count("Dưới 500K"), 1);
    assert_eq!(count("500K - 1TR"), 1);
    assert_eq!(count("1TR - 2TR"), 1);
    assert_eq!(count("2TR - 5TR"), 1);
    assert_eq!(count("Trên 5TR"), 1);
}

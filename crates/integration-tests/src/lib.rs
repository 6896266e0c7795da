//! Integration tests for Brandstore.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brandstore-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart behaviour over file-backed and failing stores
//! - `search_filter` - Catalog search composed with price ranges
//!
//! This crate also provides the shared fixtures those tests use.

use brandstore_core::{CartLine, ProductRecord};
use brandstore_storefront::catalog::JsonCatalog;
use rust_decimal::Decimal;

/// A small catalog export in the document-store shape.
pub const CATALOG_EXPORT: &str = r#"{
    "Banner": [{"url": "https://cdn.example/banner-1.png"}],
    "Category": [
        {"id": "adidas", "title": "Adidas", "picUrl": "adidas.png"},
        {"id": "nike", "title": "Nike", "picUrl": "nike.png"},
        {"id": "gucci", "title": "Gucci", "picUrl": "gucci.png"}
    ],
    "Items": [
        {"title": "Áo Adidas", "price": 300000, "categoryId": "nike", "categoryTitle": "Giày", "rated": 4.1},
        {"title": "Áo khoác Adidas", "price": 850000, "categoryId": "adidas", "categoryTitle": "Adidas", "showRecommend": true},
        {"title": "Giày Nike Air", "price": 1250000, "categoryId": "nike", "categoryTitle": "Nike", "showRecommend": true},
        {"title": "Túi Gucci Đen", "price": 12500000, "categoryId": "gucci", "categoryTitle": "Gucci"},
        {"title": "Áo thun Gucci", "price": 4900000, "categoryId": "gucci", "categoryTitle": "Gucci"}
    ]
}"#;

/// Parse [`CATALOG_EXPORT`].
///
/// # Panics
///
/// Panics if the fixture is malformed.
#[must_use]
#[allow(clippy::expect_used)]
pub fn catalog() -> JsonCatalog {
    JsonCatalog::from_json(CATALOG_EXPORT).expect("fixture catalog is valid")
}

/// A cart line with whole-unit `price`.
#[must_use]
pub fn line(title: &str, price: i64, size: &str, color: &str, quantity: u32) -> CartLine {
    ProductRecord::new(title, Decimal::new(price, 0)).into_cart_line(size, color, quantity)
}

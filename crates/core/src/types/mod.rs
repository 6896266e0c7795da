//! Core types for Brandstore.
//!
//! This module provides the catalog record shapes and the cart line model.

pub mod cart_line;
pub mod category;
pub mod price;
pub mod price_range;
pub mod product;
pub mod variant;

pub use cart_line::{CartLine, LineKey};
pub use category::{BannerRecord, CategoryQuery, CategoryRecord};
pub use price::{CurrencyCode, Price};
pub use price_range::PriceRange;
pub use product::{ProductGallery, ProductRecord};
pub use variant::{Color, Size, VariantError};

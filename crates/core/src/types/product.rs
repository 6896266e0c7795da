//! Catalog product records.
//!
//! Field names on the wire follow the catalog document store, so records
//! exported from the remote catalog and blobs written by older builds both
//! deserialize. Every field carries a serde default.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart_line::CartLine;

/// Up to three secondary gallery images. An empty string means "no image".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductGallery {
    pub img1: String,
    pub img2: String,
    pub img3: String,
}

impl ProductGallery {
    /// Iterate over the gallery images that are actually set.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        [&self.img1, &self.img2, &self.img3]
            .into_iter()
            .map(String::as_str)
            .filter(|img| !img.is_empty())
    }
}

/// A catalog item.
///
/// The `quantity_in_cart`, `selected_size` and `selected_color` fields only
/// carry meaning once the record is placed in a cart. Catalog-sourced records
/// always have them at their zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    /// Primary image reference.
    pub image: String,
    #[serde(rename = "product_gallery")]
    pub gallery: ProductGallery,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(rename = "categoryTitle")]
    pub category_title: String,
    #[serde(rename = "showRecommend")]
    pub recommended: bool,
    #[serde(rename = "rated")]
    pub rating: f64,
    #[serde(rename = "numberInCart")]
    pub quantity_in_cart: u32,
    #[serde(rename = "selectedSize")]
    pub selected_size: String,
    #[serde(rename = "selectedColor")]
    pub selected_color: String,
}

impl ProductRecord {
    /// Create a catalog record with the given title and price.
    #[must_use]
    pub fn new(title: impl Into<String>, price: Decimal) -> Self {
        Self {
            title: title.into(),
            price,
            ..Self::default()
        }
    }

    /// Primary image followed by every non-empty gallery image.
    #[must_use]
    pub fn image_list(&self) -> Vec<&str> {
        std::iter::once(self.image.as_str())
            .chain(self.gallery.images())
            .collect()
    }

    /// Whether this record still has the catalog-sourced cart fields.
    #[must_use]
    pub fn is_catalog_fresh(&self) -> bool {
        self.quantity_in_cart == 0 && self.selected_size.is_empty() && self.selected_color.is_empty()
    }

    /// Place this record in a cart with the chosen variant and quantity.
    #[must_use]
    pub fn into_cart_line(
        mut self,
        size: impl Into<String>,
        color: impl Into<String>,
        quantity: u32,
    ) -> CartLine {
        self.selected_size = size.into();
        self.selected_color = color.into();
        self.quantity_in_cart = quantity;
        CartLine::from_record(self)
    }
}

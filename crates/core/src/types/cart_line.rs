//! Cart lines and their merge key.

use std::ops::{Deref, DerefMut};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::ProductRecord;

/// Identity of a cart line for merge purposes.
///
/// Two lines are the same line iff title, size and color all match exactly.
/// There is no product id in the catalog model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub title: String,
    pub size: String,
    pub color: String,
}

impl LineKey {
    #[must_use]
    pub fn new(title: impl Into<String>, size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: size.into(),
            color: color.into(),
        }
    }

    /// Whether `record` belongs to the line identified by this key.
    #[must_use]
    pub fn matches(&self, record: &ProductRecord) -> bool {
        record.title == self.title
            && record.selected_size == self.size
            && record.selected_color == self.color
    }
}

impl std::fmt::Display for LineKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{} / {}]", self.title, self.size, self.color)
    }
}

/// A product record placed in the cart.
///
/// Serialized transparently as the underlying [`ProductRecord`], so the
/// persisted cart list has the same field set as catalog documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLine(ProductRecord);

impl CartLine {
    /// Wrap a record that already carries its cart fields.
    #[must_use]
    pub const fn from_record(record: ProductRecord) -> Self {
        Self(record)
    }

    /// The merge key of this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(
            self.0.title.clone(),
            self.0.selected_size.clone(),
            self.0.selected_color.clone(),
        )
    }

    /// Whether this line and `other` share a merge key.
    #[must_use]
    pub fn same_line(&self, other: &Self) -> bool {
        self.0.title == other.0.title
            && self.0.selected_size == other.0.selected_size
            && self.0.selected_color == other.0.selected_color
    }

    /// Unit price multiplied by the quantity in cart, or `None` if the
    /// product does not fit in a `Decimal`.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.0.price.checked_mul(Decimal::from(self.0.quantity_in_cart))
    }

    /// Unwrap into the underlying record.
    #[must_use]
    pub fn into_record(self) -> ProductRecord {
        self.0
    }
}

impl Deref for CartLine {
    type Target = ProductRecord;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CartLine {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

//! Checkout totals derived from the cart subtotal.
//!
//! None of these values are persisted; they are recomputed from the cart
//! every time the cart screen renders.

use brandstore_core::Price;
use rust_decimal::{Decimal, RoundingStrategy};

/// Tax rate and delivery fee applied at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutPolicy {
    /// Fraction of the subtotal charged as tax (e.g. `0.02`).
    pub tax_rate: Decimal,
    /// Flat delivery fee, independent of cart contents.
    pub delivery_fee: Decimal,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(2, 2),
            delivery_fee: Decimal::new(10, 0),
        }
    }
}

impl CheckoutPolicy {
    /// Tax owed on `subtotal`, rounded half-up to two decimal places.
    /// `None` if the product overflows.
    #[must_use]
    pub fn tax_on(&self, subtotal: Decimal) -> Option<Decimal> {
        subtotal
            .checked_mul(self.tax_rate)
            .map(|tax| tax.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Subtotal, tax, delivery and grand total for one cart render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub delivery: Decimal,
    pub total: Decimal,
}

impl CartSummary {
    /// Derive every checkout figure from a subtotal. `None` if the tax or
    /// the grand total does not fit in a `Decimal`.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal, policy: &CheckoutPolicy) -> Option<Self> {
        let tax = policy.tax_on(subtotal)?;
        let delivery = policy.delivery_fee;
        let total = subtotal.checked_add(tax)?.checked_add(delivery)?;
        Some(Self {
            subtotal,
            tax,
            delivery,
            total,
        })
    }

    /// Display rows in screen order, formatted in whole currency units.
    #[must_use]
    pub fn display_rows(&self) -> [(&'static str, String); 4] {
        [
            ("Subtotal", Price::vnd(self.subtotal).display()),
            ("Tax", Price::vnd(self.tax).display()),
            ("Delivery", Price::vnd(self.delivery).display()),
            ("Total", Price::vnd(self.total).display()),
        ]
    }
}

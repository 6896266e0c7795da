//! Type-safe price representation using decimal arithmetic.
//!
//! Display formatting drops the sub-unit part entirely: the storefront never
//! shows fractions of a currency unit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the default currency.
    #[must_use]
    pub fn vnd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::VND)
    }

    /// Format for display, truncated to the integer unit with thousands
    /// grouping (e.g. `250,000 ₫`).
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {}",
            group_thousands(self.amount),
            self.currency_code.symbol()
        )
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    VND,
    USD,
}

impl CurrencyCode {
    /// Display symbol for this currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::VND => "₫",
            Self::USD => "$",
        }
    }
}

/// Truncate `amount` to its integer part and group digits by thousands.
#[must_use]
pub fn group_thousands(amount: Decimal) -> String {
    let whole = amount.trunc().normalize();
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole.is_sign_negative() && !whole.is_zero() {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(Decimal::ZERO), "0");
        assert_eq!(group_thousands(Decimal::new(999, 0)), "999");
        assert_eq!(group_thousands(Decimal::new(1000, 0)), "1,000");
        assert_eq!(group_thousands(Decimal::new(250_000, 0)), "250,000");
        assert_eq!(group_thousands(Decimal::new(1_234_567, 0)), "1,234,567");
    }

    #[test]
    fn test_group_thousands_truncates_fraction() {
        // 5265.99 shows as 5,265: no rounding up
        assert_eq!(group_thousands(Decimal::new(526_599, 2)), "5,265");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands(Decimal::new(-1_500, 0)), "-1,500");
    }

    #[test]
    fn test_price_display() {
        let price = Price::vnd(Decimal::new(265_010, 0));
        assert_eq!(price.display(), "265,010 ₫");
        assert_eq!(price.to_string(), "265,010 ₫");
    }
}

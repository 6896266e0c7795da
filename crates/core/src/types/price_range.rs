//! Inclusive price bounds used as a post-search filter.

use rust_decimal::Decimal;

use super::product::ProductRecord;

/// A labelled, inclusive `[min, max]` price bound.
///
/// Bounds are not validated; a range with `min > max` simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRange {
    pub label: String,
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    #[must_use]
    pub fn new(label: impl Into<String>, min: Decimal, max: Decimal) -> Self {
        Self {
            label: label.into(),
            min,
            max,
        }
    }

    /// Whether `price` lies within the range, both bounds inclusive.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }

    /// Keep the products whose price lies within the range, preserving order.
    pub fn filter<'a, I>(&self, products: I) -> Vec<&'a ProductRecord>
    where
        I: IntoIterator<Item = &'a ProductRecord>,
    {
        products
            .into_iter()
            .filter(|product| self.contains(product.price))
            .collect()
    }

    /// The storefront's filter chips, cheapest first.
    #[must_use]
    pub fn presets() -> Vec<Self> {
        vec![
            Self::new("Dưới 500K", Decimal::ZERO, Decimal::new(500_000, 0)),
            Self::new(
                "500K - 1TR",
                Decimal::new(500_000, 0),
                Decimal::new(1_000_000, 0),
            ),
            Self::new(
                "1TR - 2TR",
                Decimal::new(1_000_000, 0),
                Decimal::new(2_000_000, 0),
            ),
            Self::new(
                "2TR - 5TR",
                Decimal::new(2_000_000, 0),
                Decimal::new(5_000_000, 0),
            ),
            Self::new("Trên 5TR", Decimal::new(5_000_000, 0), Decimal::MAX),
        ]
    }

    /// Look up a preset by its label.
    #[must_use]
    pub fn preset(label: &str) -> Option<Self> {
        Self::presets().into_iter().find(|range| range.label == label)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = PriceRange::new("r", Decimal::new(100, 0), Decimal::new(200, 0));
        assert!(range.contains(Decimal::new(100, 0)));
        assert!(range.contains(Decimal::new(200, 0)));
        assert!(!range.contains(Decimal::new(99, 0)));
        assert!(!range.contains(Decimal::new(201, 0)));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = PriceRange::new("r", Decimal::new(200, 0), Decimal::new(100, 0));
        assert!(!range.contains(Decimal::new(150, 0)));
    }

    #[test]
    fn test_filter_preserves_order() {
        let products = vec![
            ProductRecord::new("a", Decimal::new(600_000, 0)),
            ProductRecord::new("b", Decimal::new(100_000, 0)),
            ProductRecord::new("c", Decimal::new(500_000, 0)),
        ];
        let under = PriceRange::preset("Dưới 500K").unwrap();
        let titles: Vec<_> = under
            .filter(&products)
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn test_presets_share_boundaries() {
        let presets = PriceRange::presets();
        assert_eq!(presets.len(), 5);
        for pair in presets.windows(2) {
            if let [low, high] = pair {
                assert_eq!(low.max, high.min);
            }
        }
        assert!(PriceRange::preset("Trên 5TR").unwrap().contains(Decimal::new(90_000_000, 0)));
        assert!(PriceRange::preset("nope").is_none());
    }
}

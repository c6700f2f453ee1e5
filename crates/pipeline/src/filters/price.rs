//! Filter to keep listings inside a price range.

use crate::traits::Filter;
use listing_loader::Listing;

/// Inclusive price bounds.
///
/// Defaults: `min = 0.0`, `max = f64::INFINITY`, so an omitted bound never
/// rejects a listing with a non-negative price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

/// Keeps listings whose price lies within `[min, max]`.
///
/// ## Algorithm
/// `min <= price && price <= max`, both ends inclusive.
///
/// The range is not validated. With `min > max` no finite price can pass,
/// which is the expected outcome for an empty range.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceFilter {
    range: PriceRange,
}

impl PriceFilter {
    /// Create a new PriceFilter.
    ///
    /// # Arguments
    /// * `min_price` - Lowest accepted price, inclusive
    /// * `max_price` - Highest accepted price, inclusive
    pub fn new(min_price: f64, max_price: f64) -> Self {
        Self {
            range: PriceRange {
                min: min_price,
                max: max_price,
            },
        }
    }

    /// Only a lower bound; the upper bound stays open.
    pub fn at_least(min_price: f64) -> Self {
        Self::from(PriceRange {
            min: min_price,
            ..PriceRange::default()
        })
    }

    /// Only an upper bound; the lower bound stays at zero.
    pub fn at_most(max_price: f64) -> Self {
        Self::from(PriceRange {
            max: max_price,
            ..PriceRange::default()
        })
    }

    pub fn range(&self) -> PriceRange {
        self.range
    }
}

impl From<PriceRange> for PriceFilter {
    fn from(range: PriceRange) -> Self {
        Self { range }
    }
}

impl Filter for PriceFilter {
    fn name(&self) -> &str {
        "PriceFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.price >= self.range.min && listing.price <= self.range.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_at(price: f64) -> Listing {
        Listing::new(1, "Test listing", price, 0)
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = PriceFilter::new(10.0, 20.0);

        assert!(filter.matches(&listing_at(10.0)));
        assert!(filter.matches(&listing_at(15.0)));
        assert!(filter.matches(&listing_at(20.0)));
        assert!(!filter.matches(&listing_at(9.99)));
        assert!(!filter.matches(&listing_at(20.01)));
    }

    #[test]
    fn test_default_accepts_non_negative_prices() {
        let filter = PriceFilter::default();

        assert!(filter.matches(&listing_at(0.0)));
        assert!(filter.matches(&listing_at(1.0)));
        assert!(filter.matches(&listing_at(1e12)));
        assert!(!filter.matches(&listing_at(-1.0)));
    }

    #[test]
    fn test_matches_equals_range_check() {
        let bounds = [(0.0, 0.0), (5.0, 50.0), (100.0, f64::INFINITY), (30.0, 10.0)];
        let prices = [0.0, 4.99, 5.0, 10.0, 30.0, 50.0, 99.0, 100.0, 1e9];

        for (min, max) in bounds {
            let filter = PriceFilter::new(min, max);
            for price in prices {
                assert_eq!(
                    filter.matches(&listing_at(price)),
                    price >= min && price <= max,
                    "min={min} max={max} price={price}"
                );
            }
        }
    }

    #[test]
    fn test_inverted_range_rejects_everything() {
        let filter = PriceFilter::new(100.0, 10.0);

        for price in [0.0, 10.0, 50.0, 100.0, 1000.0] {
            assert!(!filter.matches(&listing_at(price)));
        }
    }

    #[test]
    fn test_one_sided_bounds() {
        let at_least = PriceFilter::at_least(50.0);
        assert!(!at_least.matches(&listing_at(49.0)));
        assert!(at_least.matches(&listing_at(1e9)));

        let at_most = PriceFilter::at_most(50.0);
        assert!(at_most.matches(&listing_at(0.0)));
        assert!(!at_most.matches(&listing_at(50.5)));
        assert_eq!(at_most.range().min, 0.0);
    }
}

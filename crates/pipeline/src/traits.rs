//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to listing sets.

use listing_loader::Listing;

/// A single predicate over a listing.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared with rayon worker threads
/// - `matches` only borrows the listing; filters never mutate what they inspect
/// - Filters are total: a listing that fails a check is a `false`, not an error
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Returns true if the listing passes this filter.
    fn matches(&self, listing: &Listing) -> bool;
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn matches(&self, listing: &Listing) -> bool {
        (**self).matches(listing)
    }
}

impl<F: Filter + ?Sized> Filter for &F {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn matches(&self, listing: &Listing) -> bool {
        (**self).matches(listing)
    }
}

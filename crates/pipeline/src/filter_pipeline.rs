//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, plus the
//! `filter_listings` free function for callers that already hold a
//! slice of filters.

use crate::traits::Filter;
use listing_loader::Listing;
use rayon::prelude::*;

/// Returns the listings that pass every filter, in their original order.
///
/// Filters are evaluated in the order given and stop at the first failure.
/// An empty `filters` slice keeps every listing.
pub fn filter_listings<F: Filter>(listings: &[Listing], filters: &[F]) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| passes_all(filters, listing))
        .cloned()
        .collect()
}

fn passes_all<F: Filter>(filters: &[F], listing: &Listing) -> bool {
    filters.iter().all(|filter| filter.matches(listing))
}

/// Chains multiple filters together into a processing pipeline.
///
/// A listing survives the pipeline only if every filter matches it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(PriceFilter::new(10.0, 200.0))
///     .add_filter(ElapsedTimeFilter::new(7.0 * 86_400.0))
///     .add_filter(KeywordFilter::new(["bike"], ["broken"]));
///
/// let filtered = pipeline.apply(listings);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add an already boxed filter in place.
    pub fn push_filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in evaluation order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the listings.
    ///
    /// ## Algorithm
    /// 1. Start with the input listings
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Drop the listings the filter rejects (stable, in place)
    ///    c. Log output count
    /// 3. Return the surviving listings
    ///
    /// A listing rejected by one filter is never shown to the filters after
    /// it, so each listing sees the filters in order and stops at the first
    /// failure.
    pub fn apply(&self, listings: Vec<Listing>) -> Vec<Listing> {
        let mut current = listings;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|listing| filter.matches(listing));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Borrowing variant of [`apply`](Self::apply): returns references into
    /// `listings` instead of taking ownership.
    pub fn select<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        let selected: Vec<&Listing> = listings
            .iter()
            .filter(|listing| self.matches(listing))
            .collect();
        tracing::debug!(
            "Selected {} of {} listings through {} filters",
            selected.len(),
            listings.len(),
            self.filters.len()
        );
        selected
    }

    /// Parallel variant of [`apply`](Self::apply) for large listing sets.
    ///
    /// Listings are evaluated on the rayon thread pool; the output keeps
    /// the input order.
    pub fn par_apply(&self, listings: Vec<Listing>) -> Vec<Listing> {
        let input_count = listings.len();
        let filtered: Vec<Listing> = listings
            .into_par_iter()
            .filter(|listing| self.matches(listing))
            .collect();
        tracing::debug!(
            "Parallel filtering kept {} of {} listings",
            filtered.len(),
            input_count
        );
        filtered
    }
}

impl Filter for FilterPipeline {
    fn name(&self) -> &str {
        "FilterPipeline"
    }

    fn matches(&self, listing: &Listing) -> bool {
        passes_all(self.filters.as_slice(), listing)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

//! Adapter for caller-defined predicates.

use crate::traits::Filter;
use listing_loader::Listing;

/// Wraps a closure so it can sit in a FilterPipeline next to the built-in
/// filters.
///
/// ```ignore
/// let has_id = FnFilter::new("EvenIdFilter", |listing: &Listing| listing.id % 2 == 0);
/// ```
pub struct FnFilter<F> {
    name: String,
    predicate: F,
}

impl<F> FnFilter<F>
where
    F: Fn(&Listing) -> bool + Send + Sync,
{
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(&Listing) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, listing: &Listing) -> bool {
        (self.predicate)(listing)
    }
}

//! Core domain types for classified-ad listings.
//!
//! A [`Listing`] is an immutable value: the loader builds it once and every
//! consumer afterwards only borrows it.

use serde::{Deserialize, Serialize};

/// Unique identifier for a listing, assigned by whatever feed produced it
pub type ListingId = u64;

/// Unix timestamp in seconds
pub type Timestamp = i64;

/// One classified ad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    /// Display title, used for keyword matching
    pub name: String,
    /// Asking price. Non-negative by convention, not enforced.
    pub price: f64,
    /// When the ad was posted (Unix seconds)
    pub posted_at: Timestamp,
}

impl Listing {
    pub fn new(id: ListingId, name: impl Into<String>, price: f64, posted_at: Timestamp) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            posted_at,
        }
    }

    /// Seconds elapsed between posting and `now`.
    ///
    /// Negative when the posting time lies after `now` (clock skew between
    /// the feed and the caller).
    pub fn age_seconds(&self, now: Timestamp) -> i64 {
        now.saturating_sub(self.posted_at)
    }
}

//! Filter for listing recency.
//!
//! Keeps listings posted no longer ago than a maximum age.

use crate::traits::Filter;
use listing_loader::{Listing, Timestamp};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Current wall-clock time as Unix seconds.
pub fn unix_now() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as Timestamp)
        .unwrap_or(0)
}

/// Filters listings by how long ago they were posted.
///
/// ## Algorithm
/// 1. age = `now - listing.posted_at` (seconds)
/// 2. Keep the listing if `age <= max_age_seconds`
/// 3. An infinite maximum keeps everything
///
/// The reference time is fixed when the filter is built, so every listing in
/// one filtering call is measured against the same instant.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimeFilter {
    max_age_seconds: f64,
    now: Timestamp,
}

impl ElapsedTimeFilter {
    /// Create a new ElapsedTimeFilter measured against the current time.
    ///
    /// # Arguments
    /// * `max_age_seconds` - Oldest accepted age, inclusive (`f64::INFINITY` disables the check)
    pub fn new(max_age_seconds: f64) -> Self {
        Self::at(max_age_seconds, unix_now())
    }

    /// Create a filter measured against an explicit reference time.
    pub fn at(max_age_seconds: f64, now: Timestamp) -> Self {
        Self {
            max_age_seconds,
            now,
        }
    }

    pub fn from_duration(max_age: Duration) -> Self {
        Self::new(max_age.as_secs_f64())
    }

    pub fn max_age_seconds(&self) -> f64 {
        self.max_age_seconds
    }

    pub fn reference_time(&self) -> Timestamp {
        self.now
    }
}

impl Default for ElapsedTimeFilter {
    fn default() -> Self {
        Self::new(f64::INFINITY)
    }
}

impl Filter for ElapsedTimeFilter {
    fn name(&self) -> &str {
        "ElapsedTimeFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        if self.max_age_seconds == f64::INFINITY {
            return true;
        }
        (listing.age_seconds(self.now) as f64) <= self.max_age_seconds
    }
}

//! Filter implementations for the listing pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod custom;
pub mod elapsed_time;
pub mod keywords;
pub mod price;

// Re-export for convenience
pub use custom::FnFilter;
pub use elapsed_time::{unix_now, ElapsedTimeFilter};
pub use keywords::KeywordFilter;
pub use price::{PriceFilter, PriceRange};

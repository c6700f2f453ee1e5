//! Pipeline for filtering classified-ad listings.
//!
//! This crate provides:
//! - Filter trait and implementations for listing filtering
//! - FilterPipeline for composing filters
//! - FilterConfig for building a pipeline from JSON settings
//!
//! ## Architecture
//! Filters are independent predicates over a single listing:
//! 1. PriceFilter keeps listings inside an inclusive price range
//! 2. ElapsedTimeFilter keeps listings posted recently enough
//! 3. KeywordFilter requires title keywords and rejects excluded words
//! 4. FnFilter adapts any caller closure
//!
//! The pipeline keeps a listing only if every filter matches it, and
//! always preserves input order.
//!
//! ## Example Usage
//! ```ignore
//! use listing_pipeline::FilterPipeline;
//! use listing_pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(PriceFilter::new(0.0, 150.0))
//!     .add_filter(ElapsedTimeFilter::new(3.0 * 86_400.0))
//!     .add_filter(KeywordFilter::new(["shoes"], ["scam"]));
//!
//! let filtered = pipeline.apply(listings);
//! ```

pub mod config;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use config::{ConfigError, FilterConfig};
pub use filter_pipeline::{filter_listings, FilterPipeline};
pub use traits::Filter;

//! Declarative filter configuration.
//!
//! A [`FilterConfig`] describes which filters to build and with which
//! settings. Every field is optional; only filters whose settings are present
//! end up in the pipeline.
//!
//! ```json
//! {
//!   "min_price": 10,
//!   "max_price": 250,
//!   "max_age_seconds": 604800,
//!   "must_include": ["bike"],
//!   "must_exclude": ["broken", "parts"]
//! }
//! ```

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{ElapsedTimeFilter, KeywordFilter, PriceFilter, PriceRange};
use listing_loader::Timestamp;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a filter configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read filter config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid filter config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Lowest accepted price. Defaults to 0 when only `max_price` is set.
    pub min_price: Option<f64>,
    /// Highest accepted price. Unbounded when absent.
    pub max_price: Option<f64>,
    /// Oldest accepted listing age in seconds. No recency check when absent.
    pub max_age_seconds: Option<f64>,
    pub must_include: Vec<String>,
    pub must_exclude: Vec<String>,
}

impl FilterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Price bounds with defaults applied, or None if neither bound is set.
    pub fn price_range(&self) -> Option<PriceRange> {
        if self.min_price.is_none() && self.max_price.is_none() {
            return None;
        }
        let defaults = PriceRange::default();
        Some(PriceRange {
            min: self.min_price.unwrap_or(defaults.min),
            max: self.max_price.unwrap_or(defaults.max),
        })
    }

    /// Build the pipeline: price, then recency, then keywords.
    ///
    /// `now` is the reference time for the recency filter.
    pub fn build_pipeline(&self, now: Timestamp) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();

        if let Some(range) = self.price_range() {
            pipeline.push_filter(Box::new(PriceFilter::from(range)));
        }
        if let Some(max_age) = self.max_age_seconds {
            pipeline.push_filter(Box::new(ElapsedTimeFilter::at(max_age, now)));
        }
        if !self.must_include.is_empty() || !self.must_exclude.is_empty() {
            pipeline.push_filter(Box::new(KeywordFilter::new(
                &self.must_include,
                &self.must_exclude,
            )));
        }

        tracing::debug!("Built filter pipeline: {:?}", pipeline.filter_names());
        pipeline
    }
}

//! Error types for the listing-loader crate.
//!
//! Loading is the only fallible step around the filter engine: the filters
//! themselves are total over well-formed listings, so every shape problem
//! (missing fields, non-numeric prices) is reported here instead.

use thiserror::Error;

/// Errors that can occur while reading a listing feed.
#[derive(Error, Debug)]
pub enum ListingLoadError {
    /// I/O error occurred while reading the feed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a `.dat` feed couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A JSON feed was malformed
    #[error("Invalid JSON feed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ListingLoadError>;

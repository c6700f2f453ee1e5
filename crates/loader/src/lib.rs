//! # Listing Loader Crate
//!
//! This crate is the ingestion boundary for the listing filter engine: it
//! defines the [`Listing`] record and reads listing feeds from disk.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Listing, ListingId, Timestamp)
//! - **parser**: Parse `.dat` and JSON feeds into Listings
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use listing_loader::load_listings;
//! use std::path::Path;
//!
//! let listings = load_listings(Path::new("data/listings.dat"))?;
//! println!("Loaded {} listings", listings.len());
//! ```

pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{ListingLoadError, Result};
pub use parser::{load_listings, parse_listings, parse_listings_json, parse_listings_str};
pub use types::{Listing, ListingId, Timestamp};

//! Parsers for listing feeds.
//!
//! Two feed shapes are supported:
//! - `listings.dat`: `id::name::price::posted_at`, one listing per line
//! - JSON: an array of objects with the same four fields
//!
//! Shape checks live here so that everything handed to the filters is a
//! well-formed [`Listing`].

use crate::error::{ListingLoadError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;

/// Load a feed, picking the parser from the file extension.
///
/// `.json` files go through [`parse_listings_json`], everything else is
/// treated as a `.dat` feed.
pub fn load_listings(path: &Path) -> Result<Vec<Listing>> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let listings = if is_json {
        parse_listings_json(&fs::read_to_string(path)?)?
    } else {
        parse_listings(path)?
    };

    tracing::info!("Loaded {} listings from {}", listings.len(), path.display());
    Ok(listings)
}

/// Parse a `listings.dat` file
///
/// Format: id::name::price::posted_at
///
/// The id is taken from the front and price/posted_at from the back, so a
/// title may itself contain `::`.
pub fn parse_listings(path: &Path) -> Result<Vec<Listing>> {
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "listings.dat".to_string());
    let content = fs::read_to_string(path)?;
    parse_listings_str(&content, &file)
}

/// Parse `.dat` content that has already been read into memory.
///
/// `file` is only used for error messages.
pub fn parse_listings_str(content: &str, file: &str) -> Result<Vec<Listing>> {
    let mut listings = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue; // Skip empty lines
        }

        let parse_error = |reason: String| ListingLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason,
        };

        let (id, rest) = line_trimmed
            .split_once("::")
            .ok_or_else(|| parse_error("Missing name".to_string()))?;

        let mut tail = rest.rsplitn(3, "::");
        let posted_at = tail
            .next()
            .ok_or_else(|| parse_error("Missing posted_at".to_string()))?;
        let price = tail
            .next()
            .ok_or_else(|| parse_error("Missing price".to_string()))?;
        let name = tail.next().ok_or_else(|| {
            parse_error("Expected id::name::price::posted_at".to_string())
        })?;

        let listing = Listing {
            id: id
                .parse()
                .map_err(|e| parse_error(format!("Invalid id: {}", e)))?,
            name: name.to_string(),
            price: parse_price(price).map_err(&parse_error)?,
            posted_at: posted_at
                .parse()
                .map_err(|e| parse_error(format!("Invalid posted_at: {}", e)))?,
        };

        listings.push(listing);
    }

    Ok(listings)
}

/// Parse a JSON array of listings.
pub fn parse_listings_json(content: &str) -> Result<Vec<Listing>> {
    let listings: Vec<Listing> = serde_json::from_str(content)?;
    for listing in &listings {
        if !listing.price.is_finite() {
            return Err(ListingLoadError::InvalidValue {
                field: "price".to_string(),
                value: listing.price.to_string(),
            });
        }
    }
    Ok(listings)
}

/// Prices must be finite numbers; NaN would make every range check false.
fn parse_price(s: &str) -> std::result::Result<f64, String> {
    let price: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("Invalid price: {}", e))?;
    if !price.is_finite() {
        return Err(format!("Invalid price: {}", s));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_dat_lines() {
        let content = "1::Mountain bike::250.5::1700000000\n\n2::Desk lamp::15::1700003600\n";
        let listings = parse_listings_str(content, "listings.dat").unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0], Listing::new(1, "Mountain bike", 250.5, 1_700_000_000));
        assert_eq!(listings[1].id, 2);
        assert_eq!(listings[1].price, 15.0);
    }

    #[test]
    fn test_name_may_contain_separator() {
        let content = "7::Rust::Book 2nd edition::20::1700000000";
        let listings = parse_listings_str(content, "listings.dat").unwrap();

        assert_eq!(listings[0].name, "Rust::Book 2nd edition");
        assert_eq!(listings[0].price, 20.0);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let content = "1::Chair::10::1700000000\n2::Table::cheap::1700000000";
        let err = parse_listings_str(content, "feed.dat").unwrap_err();

        match err {
            ListingLoadError::ParseError { file, line, reason } => {
                assert_eq!(file, "feed.dat");
                assert_eq!(line, 2);
                assert!(reason.starts_with("Invalid price"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_fields() {
        assert!(parse_listings_str("1::Chair::10", "listings.dat").is_err());
        assert!(parse_listings_str("1", "listings.dat").is_err());
    }

    #[test]
    fn test_non_finite_price_rejected() {
        assert!(parse_listings_str("1::Chair::NaN::1700000000", "listings.dat").is_err());
        assert!(parse_listings_str("1::Chair::inf::1700000000", "listings.dat").is_err());
    }

    #[test]
    fn test_parse_json() {
        let content = r#"[
            {"id": 1, "name": "Running Shoes", "price": 40.0, "posted_at": 1700000000},
            {"id": 2, "name": "Sofa", "price": 120.0, "posted_at": 1700000100}
        ]"#;
        let listings = parse_listings_json(content).unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[1].name, "Sofa");
    }

    #[test]
    fn test_parse_json_malformed() {
        let err = parse_listings_json(r#"[{"id": 1, "name": "Sofa"}]"#).unwrap_err();
        assert!(matches!(err, ListingLoadError::JsonError(_)));
    }

    #[test]
    fn test_load_listings_picks_parser_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let dat_path = dir.path().join("listings.dat");
        let mut dat = fs::File::create(&dat_path).unwrap();
        writeln!(dat, "1::Chair::10::1700000000").unwrap();

        let json_path = dir.path().join("listings.json");
        fs::write(
            &json_path,
            r#"[{"id": 2, "name": "Table", "price": 30.0, "posted_at": 1700000000}]"#,
        )
        .unwrap();

        assert_eq!(load_listings(&dat_path).unwrap()[0].name, "Chair");
        assert_eq!(load_listings(&json_path).unwrap()[0].name, "Table");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_listings(Path::new("does/not/exist.dat")).unwrap_err();
        assert!(matches!(err, ListingLoadError::IoError(_)));
    }
}

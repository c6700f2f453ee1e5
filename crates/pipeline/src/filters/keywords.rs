//! Filter on words in the listing title.
//!
//! Inclusion and exclusion deliberately use different matching rules:
//! required keywords match anywhere as substrings, while excluded keywords
//! only match whole whitespace-separated words. Excluding "cat" must not
//! reject "category".

use crate::traits::Filter;
use listing_loader::Listing;

/// Keeps listings whose title contains every required keyword and none of
/// the excluded words. Matching is case-insensitive.
///
/// ## Algorithm
/// 1. Lowercase the title
/// 2. Every `must_include` entry must be a substring of the title
/// 3. Split the title on whitespace runs; no token may equal a `must_exclude` entry
///
/// Tokens keep their punctuation, so "cat!" is not the word "cat". A
/// multi-word exclusion entry can never equal a single token and therefore
/// never matches.
#[derive(Debug, Clone, Default)]
pub struct KeywordFilter {
    must_include: Vec<String>,
    must_exclude: Vec<String>,
}

impl KeywordFilter {
    /// Create a new KeywordFilter.
    ///
    /// # Arguments
    /// * `must_include` - Substrings that must all appear in the title
    /// * `must_exclude` - Words that must not appear in the title
    pub fn new<I, E>(must_include: I, must_exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            must_include: lowercase_all(must_include),
            must_exclude: lowercase_all(must_exclude),
        }
    }

    /// Only required keywords.
    pub fn including<I>(must_include: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            must_include: lowercase_all(must_include),
            must_exclude: Vec::new(),
        }
    }

    /// Only excluded words.
    pub fn excluding<E>(must_exclude: E) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            must_include: Vec::new(),
            must_exclude: lowercase_all(must_exclude),
        }
    }

    /// Build the filter from a free-text search term: each word of the term
    /// becomes a required keyword.
    pub fn for_search_term<E>(term: &str, must_exclude: E) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self::new(term.split_whitespace(), must_exclude)
    }

    pub fn must_include(&self) -> &[String] {
        &self.must_include
    }

    pub fn must_exclude(&self) -> &[String] {
        &self.must_exclude
    }
}

impl Filter for KeywordFilter {
    fn name(&self) -> &str {
        "KeywordFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        let title = listing.name.to_lowercase();

        // Substring match
        let includes_all = self
            .must_include
            .iter()
            .all(|keyword| title.contains(keyword.as_str()));

        includes_all && !contains_excluded_word(&self.must_exclude, &title)
    }
}

fn lowercase_all<I>(words: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().to_lowercase())
        .collect()
}

/// Whole-word match of `title` (already lowercased) against `excluded`.
///
/// `split_whitespace` never yields empty tokens, so an empty entry in
/// `excluded` cannot match.
fn contains_excluded_word(excluded: &[String], title: &str) -> bool {
    if excluded.is_empty() {
        return false;
    }
    title
        .split_whitespace()
        .any(|word| excluded.iter().any(|blocked| blocked == word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(name: &str) -> Listing {
        Listing::new(1, name, 10.0, 0)
    }

    #[test]
    fn test_inclusion_is_substring() {
        let filter = KeywordFilter::including(["shoes"]);

        assert!(filter.matches(&titled("Running Shoes For Sale")));
        assert!(filter.matches(&titled("Shoeshine kit")));
        assert!(!filter.matches(&titled("Sneakers")));
    }

    #[test]
    fn test_every_keyword_required() {
        let filter = KeywordFilter::including(["red", "BIKE"]);

        assert!(filter.matches(&titled("Red mountain bike")));
        assert!(filter.matches(&titled("bikes, red and blue")));
        assert!(!filter.matches(&titled("Blue mountain bike")));
    }

    #[test]
    fn test_exclusion_is_whole_word() {
        let filter = KeywordFilter::excluding(["scam"]);

        assert!(!filter.matches(&titled("Totally not a scam deal")));
        assert!(!filter.matches(&titled("SCAM deal")));
        assert!(filter.matches(&titled("scammer deal")));
    }

    #[test]
    fn test_exclusion_keeps_punctuation() {
        let filter = KeywordFilter::excluding(["cat"]);

        assert!(filter.matches(&titled("Cat! toys")));
        assert!(filter.matches(&titled("Category: furniture")));
        assert!(!filter.matches(&titled("cat toys")));
    }

    #[test]
    fn test_exclusion_entries_are_case_insensitive() {
        let filter = KeywordFilter::excluding(["Broken"]);
        assert!(!filter.matches(&titled("broken lamp")));
    }

    #[test]
    fn test_whitespace_runs_do_not_create_empty_tokens() {
        let filter = KeywordFilter::excluding([""]);

        assert!(filter.matches(&titled("  two   spaces\tand\ttabs  ")));
        assert!(filter.matches(&titled("")));
    }

    #[test]
    fn test_multi_word_exclusion_never_matches() {
        let filter = KeywordFilter::excluding(["for parts"]);
        assert!(filter.matches(&titled("Laptop for parts")));
    }

    #[test]
    fn test_include_and_exclude_combined() {
        let filter = KeywordFilter::new(["guitar"], ["broken", "parts"]);

        assert!(filter.matches(&titled("Acoustic guitar, mint")));
        assert!(!filter.matches(&titled("Broken guitar")));
        assert!(!filter.matches(&titled("Piano")));
    }

    #[test]
    fn test_empty_lists_accept_everything() {
        let filter = KeywordFilter::default();

        assert!(filter.matches(&titled("Anything at all")));
        assert!(filter.matches(&titled("")));
    }

    #[test]
    fn test_for_search_term() {
        let filter = KeywordFilter::for_search_term("  Vintage  Camera ", ["replica"]);

        assert_eq!(filter.must_include(), ["vintage", "camera"]);
        assert!(filter.matches(&titled("Camera, vintage 1970s")));
        assert!(!filter.matches(&titled("Vintage camera replica")));
    }
}

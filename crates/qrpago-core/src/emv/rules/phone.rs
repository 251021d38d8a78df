//! Colombian mobile number validation and extraction.

use super::patterns::{PHONE_FULL, PHONE_SEARCH};
use super::FieldExtractor;

/// Mobile number extractor for phone-based payment networks.
pub struct PhoneExtractor;

impl PhoneExtractor {
    /// Create a new phone extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        PHONE_SEARCH.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE_SEARCH
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// First substring in `text` matching the mobile-number pattern.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text)
}

/// Whether `candidate` is, in full, a Colombian mobile number.
///
/// Accepted prefixes: international `+57`, bare `57`, or a leading `0`;
/// the subscriber part is `3` followed by nine digits.
pub fn validate_phone(candidate: &str) -> bool {
    PHONE_FULL.is_match(candidate)
}

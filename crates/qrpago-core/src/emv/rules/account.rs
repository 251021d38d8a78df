//! Account-number runs for account-based payment networks.

use super::patterns::ACCOUNT_RUN;
use super::FieldExtractor;

/// Account-number extractor: runs of 10-16 digits.
pub struct AccountExtractor;

impl AccountExtractor {
    /// Create a new account extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for AccountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AccountExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        ACCOUNT_RUN.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ACCOUNT_RUN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// First run of 10-16 digits found anywhere in `text`.
pub fn extract_account(text: &str) -> Option<String> {
    AccountExtractor::new().extract(text)
}

//! National identity number (cedula/NIT) extraction.

use super::patterns::NATIONAL_ID_FULL;
use super::FieldExtractor;

/// National-ID extractor over template sub-tag candidates.
pub struct NationalIdExtractor;

impl NationalIdExtractor {
    /// Create a new national-ID extractor.
    pub fn new() -> Self {
        Self
    }

    /// Fold a sequence of candidates down to the last valid one.
    ///
    /// Mirrors the ascending template scan: every valid candidate overwrites
    /// the previous, with no early exit.
    pub fn last_valid<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a str>,
    ) -> Option<String> {
        let mut found = None;
        for candidate in candidates {
            if validate_national_id(candidate) {
                found = Some(candidate.to_string());
            }
        }
        found
    }
}

impl Default for NationalIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NationalIdExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        validate_national_id(text).then(|| text.to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract(text).into_iter().collect()
    }
}

/// Validate `candidate` as a national ID.
pub fn extract_national_id(candidate: &str) -> Option<String> {
    NationalIdExtractor::new().extract(candidate)
}

/// Whether `candidate` is, in full, a run of 7-10 digits.
pub fn validate_national_id(candidate: &str) -> bool {
    NATIONAL_ID_FULL.is_match(candidate)
}

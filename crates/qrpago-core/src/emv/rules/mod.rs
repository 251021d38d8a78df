//! Rule-based field extractors for payment payloads.

pub mod account;
pub mod national_id;
pub mod patterns;
pub mod phone;

pub use account::{extract_account, AccountExtractor};
pub use national_id::{extract_national_id, validate_national_id, NationalIdExtractor};
pub use phone::{extract_phone, validate_phone, PhoneExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

//! EMV merchant-presented QR payload decoding and field extraction.
//!
//! The pipeline is a one-way flow: raw text -> top-level tag map -> weak
//! platform hint -> nested templates (tags 62 and 26-51) -> authoritative
//! platform -> validated field candidates -> regex fallback -> final
//! [`PaymentInfo`](crate::models::PaymentInfo). Every stage is total; bad
//! input degrades to defaults instead of failing.

mod parser;
pub mod platform;
pub mod rules;
pub mod template;
pub mod tlv;

pub use parser::{extract_payment_info, PaymentParser};
pub use tlv::{decode, TagMap};

use crate::models::PaymentInfo;

/// Trait for payment payload extractors.
pub trait PaymentExtractor {
    /// Extract payment data from a raw payload. Total: never fails.
    fn extract(&self, payload: &str) -> PaymentInfo;
}

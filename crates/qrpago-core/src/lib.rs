//! Core library for Colombian payment QR processing.
//!
//! This crate provides:
//! - EMV merchant-presented TLV payload decoding
//! - Payment network classification (Nequi, Bancolombia, Davivienda, Daviplata)
//! - Field extraction (number, merchant name, city, national ID)
//! - QR image generation and presentation of extracted records

pub mod emv;
pub mod error;
pub mod models;
pub mod presenter;
pub mod qrgen;
pub mod scan;
pub mod session;

pub use emv::{decode, extract_payment_info, PaymentExtractor, PaymentParser, TagMap};
pub use error::{QrPagoError, Result};
pub use models::{ExtractionConfig, PaymentInfo, Platform, QrGenConfig, QrPagoConfig};
pub use presenter::Presenter;
pub use scan::QrScanner;
pub use session::{AccessPolicy, AccessVerdict, CallerContext, MemoryStore, SessionStore};

//! Data models for payment records and configuration.

pub mod config;
pub mod payment;

pub use config::{ExtractionConfig, QrGenConfig, QrPagoConfig};
pub use payment::{PaymentInfo, Platform};

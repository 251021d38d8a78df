//! Error types for the qrpago-core library.
//!
//! Payload extraction itself is total and never returns an error: malformed
//! input degrades to default field values (see [`crate::emv`]). The variants
//! here belong to the collaborators around the core - scanning, QR
//! generation, and session bookkeeping.

use thiserror::Error;

/// Main error type for the qrpago library.
#[derive(Error, Debug)]
pub enum QrPagoError {
    /// QR scanning error from the image boundary.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// QR image generation error.
    #[error("QR generation error: {0}")]
    QrGen(#[from] QrGenError),

    /// Session/authorization store error.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the image-to-payload scan boundary.
#[derive(Error, Debug)]
pub enum ScanError {
    /// No QR code was found in the image.
    #[error("no QR code detected")]
    NoCodeDetected,

    /// The image could not be decoded at all.
    #[error("unreadable image: {0}")]
    UnreadableImage(String),
}

/// Errors related to QR image generation.
#[derive(Error, Debug)]
pub enum QrGenError {
    /// The data exceeds the QR symbol capacity.
    #[error("data too long for QR symbol ({0} bytes)")]
    DataTooLong(usize),

    /// The encoder rejected the data.
    #[error("encoding failed: {0}")]
    Encoding(String),
}

/// Errors related to the session/authorization store.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The backing store could not be read.
    #[error("store read failed: {0}")]
    Read(String),

    /// The backing store could not be written.
    #[error("store write failed: {0}")]
    Write(String),
}

/// Result type for the qrpago library.
pub type Result<T> = std::result::Result<T, QrPagoError>;

//! Boundary trait for turning an image into a raw QR payload.
//!
//! Image decoding stays outside this crate; callers plug in whatever scanner
//! their platform provides and hand the recovered text to the extraction
//! pipeline.

use crate::error::ScanError;

/// Decodes a photographed QR code into its raw text payload.
pub trait QrScanner {
    /// Recover the payload text from encoded image bytes.
    ///
    /// Returns [`ScanError::NoCodeDetected`] when the image holds no
    /// readable QR symbol.
    fn scan(&self, image_bytes: &[u8]) -> Result<String, ScanError>;
}

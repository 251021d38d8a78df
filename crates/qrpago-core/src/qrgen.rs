//! QR image generation.
//!
//! One-way collaborator: arbitrary text in, rendered symbol out. It shares
//! nothing with the decoding core beyond the notion of a QR payload.

use image::{GrayImage, Luma};
use qrcode::QrCode;
use tracing::debug;

use crate::error::QrGenError;
use crate::models::QrGenConfig;

/// Render `data` as a grayscale QR image.
///
/// Module pixel size and quiet-zone border come from `config`. Data beyond
/// the symbol capacity yields [`QrGenError::DataTooLong`].
pub fn render(data: &str, config: &QrGenConfig) -> Result<GrayImage, QrGenError> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| match e {
        qrcode::types::QrError::DataTooLong => QrGenError::DataTooLong(data.len()),
        other => QrGenError::Encoding(format!("{other:?}")),
    })?;

    let symbol: GrayImage = code
        .render::<Luma<u8>>()
        .module_dimensions(config.module_size, config.module_size)
        .quiet_zone(false)
        .build();

    // Pad the configured quiet zone ourselves; the built-in one is fixed
    // at four modules.
    let pad = config.border * config.module_size;
    let mut framed = GrayImage::from_pixel(
        symbol.width() + 2 * pad,
        symbol.height() + 2 * pad,
        Luma([255u8]),
    );
    image::imageops::replace(&mut framed, &symbol, pad as i64, pad as i64);

    debug!(
        width = framed.width(),
        height = framed.height(),
        "rendered QR symbol"
    );
    Ok(framed)
}

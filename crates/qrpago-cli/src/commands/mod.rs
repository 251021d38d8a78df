//! CLI command implementations.

pub mod decode;
pub mod r#gen;

use qrpago_core::QrPagoConfig;

/// Load configuration from `path`, or fall back to defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<QrPagoConfig> {
    match path {
        Some(p) => Ok(QrPagoConfig::from_file(std::path::Path::new(p))?),
        None => Ok(QrPagoConfig::default()),
    }
}

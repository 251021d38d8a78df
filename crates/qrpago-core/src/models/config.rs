//! Configuration structures for the qrpago pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the qrpago pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrPagoConfig {
    /// Payload extraction configuration.
    pub extraction: ExtractionConfig,

    /// QR image generation configuration.
    pub qrgen: QrGenConfig,
}

impl Default for QrPagoConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            qrgen: QrGenConfig::default(),
        }
    }
}

/// Payload extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Fallback city when the payload carries no merchant city.
    pub default_city: String,

    /// Literal rendered for fields that were never found.
    pub placeholder: String,

    /// Validate phone candidates against the Colombian mobile pattern
    /// on phone-based networks.
    pub validate_phone: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_city: "Bogotá".to_string(),
            placeholder: "No encontrado".to_string(),
            validate_phone: true,
        }
    }
}

/// QR image generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrGenConfig {
    /// Pixel size of one QR module.
    pub module_size: u32,

    /// Quiet-zone border width, in modules.
    pub border: u32,
}

impl Default for QrGenConfig {
    fn default() -> Self {
        Self {
            module_size: 10,
            border: 5,
        }
    }
}

impl QrPagoConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

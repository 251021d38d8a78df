//! Payment record models for merchant-presented QR payloads.

use serde::{Deserialize, Serialize};

/// Payment network that issued a merchant-presented QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Network could not be determined.
    Unknown,
    /// Nequi (phone-number wallet).
    Nequi,
    /// Bancolombia (account-number based).
    Bancolombia,
    /// Davivienda (account-number based).
    Davivienda,
    /// Daviplata (phone-number wallet).
    Daviplata,
}

impl Default for Platform {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Platform {
    /// Brand tokens searched in weak-classification priority order.
    pub const BRANDS: [(Platform, &'static str); 4] = [
        (Platform::Nequi, "nequi"),
        (Platform::Bancolombia, "bancolombia"),
        (Platform::Davivienda, "davivienda"),
        (Platform::Daviplata, "daviplata"),
    ];

    /// Whether this network addresses consumers by mobile phone number.
    ///
    /// Phone networks validate number candidates against the Colombian
    /// mobile pattern; account networks accept them as-is.
    pub fn is_phone_based(&self) -> bool {
        matches!(self, Platform::Nequi | Platform::Daviplata)
    }

    /// Human-readable brand name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Unknown => "Desconocida",
            Platform::Nequi => "Nequi",
            Platform::Bancolombia => "Bancolombia",
            Platform::Davivienda => "Davivienda",
            Platform::Daviplata => "Daviplata",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Extracted payment data for one scanned payload.
///
/// Every field degrades to a default rather than failing: `location` always
/// carries at least the regional fallback city, and absent optional fields
/// render as a placeholder at presentation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    /// Issuing payment network.
    pub platform: Platform,

    /// Phone or account number, depending on the network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Merchant display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,

    /// Merchant city; never empty.
    pub location: String,

    /// National identity number (cedula/NIT), 7-10 digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
}

impl PaymentInfo {
    /// An empty record with the given fallback location.
    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            platform: Platform::Unknown,
            number: None,
            merchant_name: None,
            location: location.into(),
            national_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_default_is_unknown() {
        assert_eq!(Platform::default(), Platform::Unknown);
    }

    #[test]
    fn test_phone_based_split() {
        assert!(Platform::Nequi.is_phone_based());
        assert!(Platform::Daviplata.is_phone_based());
        assert!(!Platform::Bancolombia.is_phone_based());
        assert!(!Platform::Davivienda.is_phone_based());
        assert!(!Platform::Unknown.is_phone_based());
    }

    #[test]
    fn test_serde_round_trip() {
        let info = PaymentInfo {
            platform: Platform::Nequi,
            number: Some("573001234567".to_string()),
            merchant_name: Some("Tienda Don Pedro".to_string()),
            location: "Bogotá".to_string(),
            national_id: None,
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"nequi\""));
        assert!(!json.contains("national_id"));
        let back: PaymentInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}

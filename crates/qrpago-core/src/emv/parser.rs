//! Payment payload orchestrator.

use tracing::{debug, info};

use crate::models::{ExtractionConfig, PaymentInfo};

use super::rules::{account, national_id::NationalIdExtractor, phone};
use super::{platform, template, tlv, PaymentExtractor};

/// Top-level tag carrying the merchant display name.
const MERCHANT_NAME_TAG: &str = "59";

/// Top-level tag carrying the merchant city.
const MERCHANT_CITY_TAG: &str = "60";

/// Consumer-identifier sub-tag inside the additional-data template.
const CONSUMER_ID_SUBTAG: &str = "02";

/// Additional-data sub-tags that may carry a national ID.
const ADDITIONAL_ID_SUBTAGS: [&str; 2] = ["05", "06"];

/// Merchant-account sub-tag carrying the account or phone number.
const ACCOUNT_NUMBER_SUBTAG: &str = "01";

/// Merchant-account sub-tags that may carry a national ID.
const ACCOUNT_ID_SUBTAGS: [&str; 2] = ["02", "03"];

/// Orchestrates decoding, classification, and field extraction.
pub struct PaymentParser {
    /// Fallback city when the payload carries none.
    default_city: String,
    /// Validate phone candidates on phone-based networks.
    validate_phone: bool,
}

impl PaymentParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from an extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            default_city: config.default_city.clone(),
            validate_phone: config.validate_phone,
        }
    }

    /// Set the fallback city.
    pub fn with_default_city(mut self, city: impl Into<String>) -> Self {
        self.default_city = city.into();
        self
    }

    /// Set phone-candidate validation.
    pub fn with_phone_validation(mut self, validate: bool) -> Self {
        self.validate_phone = validate;
        self
    }

    /// Run the full extraction pipeline over one raw payload.
    ///
    /// Total: any input, including empty or adversarial text, yields a
    /// fully-defaulted record.
    pub fn parse(&self, payload: &str) -> PaymentInfo {
        info!("extracting payment info from {} characters", payload.len());

        let map = tlv::decode(payload);
        let mut current = platform::classify_weak(payload);

        let merchant_name = map.get(MERCHANT_NAME_TAG).cloned();
        let location = map
            .get(MERCHANT_CITY_TAG)
            .filter(|city| !city.is_empty())
            .cloned()
            .unwrap_or_else(|| self.default_city.clone());

        // Initial candidates from the additional-data template.
        let additional = template::additional_data(&map);
        let mut number = additional
            .as_ref()
            .and_then(|sub| sub.get(CONSUMER_ID_SUBTAG))
            .cloned();
        let mut id_candidates: Vec<String> = Vec::new();
        if let Some(sub) = &additional {
            for subtag in ADDITIONAL_ID_SUBTAGS {
                if let Some(value) = sub.get(subtag) {
                    id_candidates.push(value.clone());
                }
            }
        }

        // The template GUIDs outrank the raw-text hint.
        current = platform::classify_authoritative(&map, current);

        // Refine the number against each merchant-account template, in
        // ascending tag order with no early exit.
        for (tag, sub) in template::merchant_accounts(&map) {
            if let Some(candidate) = sub.get(ACCOUNT_NUMBER_SUBTAG) {
                if current.is_phone_based() && self.validate_phone {
                    if phone::validate_phone(candidate) {
                        number = Some(candidate.clone());
                    } else {
                        // A failed candidate clears the field; it does not
                        // fall back to the previous value.
                        debug!(%tag, "rejected phone candidate");
                        number = None;
                    }
                } else {
                    number = Some(candidate.clone());
                }
            }
            for subtag in ACCOUNT_ID_SUBTAGS {
                if let Some(value) = sub.get(subtag) {
                    id_candidates.push(value.clone());
                }
            }
        }

        let national_id =
            NationalIdExtractor::new().last_valid(id_candidates.iter().map(String::as_str));

        // Raw-payload fallback always overwrites the structured result.
        let fallback = if current.is_phone_based() {
            phone::extract_phone(payload)
        } else {
            account::extract_account(payload)
        };
        if let Some(found) = fallback {
            debug!("raw-payload fallback number: {found}");
            number = Some(found);
        }

        debug!(platform = %current, "extraction complete");
        PaymentInfo {
            platform: current,
            number,
            merchant_name,
            location,
            national_id,
        }
    }
}

impl Default for PaymentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentExtractor for PaymentParser {
    fn extract(&self, payload: &str) -> PaymentInfo {
        self.parse(payload)
    }
}

/// Extract payment info from a raw payload with default settings.
pub fn extract_payment_info(payload: &str) -> PaymentInfo {
    PaymentParser::new().parse(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Platform;
    use pretty_assertions::assert_eq;

    fn unit(tag: &str, value: &str) -> String {
        format!("{tag}{:02}{value}", value.chars().count())
    }

    #[test]
    fn test_nequi_phone_payload() {
        let account = unit("00", "co.nequi") + &unit("01", "573001234567");
        let payload = unit("00", "01")
            + &unit("26", &account)
            + &unit("59", "Tienda Don Pedro")
            + &unit("60", "Medellín");
        let info = extract_payment_info(&payload);
        assert_eq!(info.platform, Platform::Nequi);
        assert_eq!(info.number.as_deref(), Some("573001234567"));
        assert_eq!(info.merchant_name.as_deref(), Some("Tienda Don Pedro"));
        assert_eq!(info.location, "Medellín");
    }

    #[test]
    fn test_authoritative_platform_overrides_weak() {
        // Raw text names Nequi (weak pass), but the merchant-account GUID
        // names Daviplata.
        let account = unit("00", "com.daviplata") + &unit("01", "3109876543");
        let payload = unit("26", &account) + &unit("59", "nequi store");
        let info = extract_payment_info(&payload);
        assert_eq!(info.platform, Platform::Daviplata);
    }

    #[test]
    fn test_rejected_phone_candidate_clears_number() {
        let account = unit("00", "co.nequi") + &unit("01", "abc");
        let payload = unit("26", &account);
        let info = extract_payment_info(&payload);
        assert_eq!(info.platform, Platform::Nequi);
        // "abc" fails validation and nothing in the raw text matches the
        // mobile pattern, so the field stays empty.
        assert_eq!(info.number, None);
    }

    #[test]
    fn test_accepted_phone_candidate() {
        let account = unit("00", "co.nequi") + &unit("01", "573001234567");
        let payload = unit("26", &account);
        let info = extract_payment_info(&payload);
        assert_eq!(info.number.as_deref(), Some("573001234567"));
    }

    #[test]
    fn test_account_candidate_unvalidated() {
        let account = unit("00", "com.bancolombia") + &unit("01", "abc");
        let payload = unit("26", &account) + &unit("59", "x");
        let info = extract_payment_info(&payload);
        assert_eq!(info.platform, Platform::Bancolombia);
        // Account networks accept candidates as-is.
        assert_eq!(info.number.as_deref(), Some("abc"));
    }

    #[test]
    fn test_fallback_overwrites_valid_structured_number() {
        // The structured scan yields a valid account, but a 14-digit run in
        // the additional data wins the fallback.
        let account = unit("00", "com.bancolombia") + &unit("01", "abcdef");
        let extra = unit("05", "ref:12345678901234!");
        let payload = unit("26", &account) + &unit("62", &extra);
        let info = extract_payment_info(&payload);
        assert_eq!(info.number.as_deref(), Some("12345678901234"));
    }

    #[test]
    fn test_national_id_from_additional_data() {
        let extra = unit("05", "1234567");
        let payload = unit("62", &extra) + &unit("59", "x");
        let info = extract_payment_info(&payload);
        assert_eq!(info.national_id.as_deref(), Some("1234567"));
    }

    #[test]
    fn test_national_id_last_match_wins() {
        // Valid IDs in tag 62 and in an account template: the account
        // template comes later in the scan and wins.
        let extra = unit("05", "1234567");
        let account = unit("00", "com.bancolombia") + &unit("02", "898989890");
        let payload = unit("62", &extra) + &unit("26", &account);
        let info = extract_payment_info(&payload);
        assert_eq!(info.national_id.as_deref(), Some("898989890"));
    }

    #[test]
    fn test_national_id_bounds() {
        let short = unit("62", &unit("05", "123456"));
        assert_eq!(extract_payment_info(&short).national_id, None);
        let long = unit("62", &unit("05", "12345678901"));
        assert_eq!(extract_payment_info(&long).national_id, None);
    }

    #[test]
    fn test_empty_city_falls_back_to_default() {
        let payload = unit("59", "Tienda") + "6000";
        let info = extract_payment_info(&payload);
        assert_eq!(info.location, "Bogotá");
    }

    #[test]
    fn test_custom_default_city() {
        let parser = PaymentParser::new().with_default_city("Cali");
        let info = parser.parse("");
        assert_eq!(info.location, "Cali");
    }

    #[test]
    fn test_garbage_input_yields_defaults() {
        for payload in ["", "ñ☂", "59", "xx99", "5910Jon"] {
            let info = extract_payment_info(payload);
            assert_eq!(info.platform, Platform::Unknown);
            assert_eq!(info.location, "Bogotá");
        }
    }

    #[test]
    fn test_extract_is_deterministic() {
        let account = unit("00", "co.nequi") + &unit("01", "3001234567");
        let payload = unit("26", &account) + &unit("62", &unit("05", "7654321"));
        assert_eq!(extract_payment_info(&payload), extract_payment_info(&payload));
    }

    #[test]
    fn test_consumer_identifier_initial_candidate() {
        // No merchant-account template and no digit run long enough for the
        // account fallback: the tag-62 consumer identifier survives.
        let extra = unit("02", "pedro@x");
        let payload = unit("62", &extra);
        let info = extract_payment_info(&payload);
        assert_eq!(info.number.as_deref(), Some("pedro@x"));
    }
}

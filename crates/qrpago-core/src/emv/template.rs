//! Expansion of nested TLV templates.
//!
//! Two groups of top-level tags are known by protocol position to carry TLV
//! content of their own: the merchant-account-information templates (tags
//! 26-51) and the additional-data template (tag 62). Expansion re-applies the
//! TLV decoder to those values, one nesting level only - sub-values are never
//! unfolded further, matching the fixed field positions of this payload
//! family.

use super::tlv::{self, TagMap};

/// Top-level tag carrying the additional-data template.
pub const ADDITIONAL_DATA_TAG: &str = "62";

/// Numeric range of merchant-account-information template tags.
pub const MERCHANT_ACCOUNT_RANGE: std::ops::RangeInclusive<u8> = 26..=51;

/// Decode the value under `tag` as a nested tag map.
///
/// Absence of the tag yields `None`; a present but malformed value yields a
/// partial (possibly empty) map, like any other decode.
pub fn expand_tag(map: &TagMap, tag: &str) -> Option<TagMap> {
    map.get(tag).map(|value| tlv::decode(value))
}

/// Decode the additional-data template, if present.
pub fn additional_data(map: &TagMap) -> Option<TagMap> {
    expand_tag(map, ADDITIONAL_DATA_TAG)
}

/// Expand every merchant-account template present, in ascending tag order.
///
/// The ascending order is load-bearing: all downstream scans over these
/// templates resolve conflicts by last match in this order.
pub fn merchant_accounts(map: &TagMap) -> Vec<(String, TagMap)> {
    MERCHANT_ACCOUNT_RANGE
        .map(|n| format!("{n:02}"))
        .filter_map(|tag| expand_tag(map, &tag).map(|sub| (tag, sub)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expand_additional_data() {
        let map = tlv::decode("62180214573001234567");
        let sub = additional_data(&map).unwrap();
        assert_eq!(sub.get("02").map(String::as_str), Some("573001234567"));
    }

    #[test]
    fn test_absent_tag_yields_none() {
        let map = tlv::decode("5907Jon Doe");
        assert!(additional_data(&map).is_none());
        assert!(expand_tag(&map, "26").is_none());
    }

    #[test]
    fn test_merchant_accounts_ascending() {
        // Tags appear out of order in the payload; expansion sorts by range.
        let map = tlv::decode("49080004test26150011bancolombia");
        let accounts = merchant_accounts(&map);
        let tags: Vec<&str> = accounts.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tags, vec!["26", "49"]);
    }

    #[test]
    fn test_single_level_only() {
        // The inner value is itself TLV-shaped but stays a flat string.
        let map = tlv::decode("261001065907ab");
        let accounts = merchant_accounts(&map);
        let (_, sub) = &accounts[0];
        assert_eq!(sub.get("01").map(String::as_str), Some("5907ab"));
    }

    #[test]
    fn test_malformed_template_yields_partial_map() {
        let map = tlv::decode("2604ZZZZ");
        let sub = expand_tag(&map, "26").unwrap();
        assert!(sub.is_empty());
    }
}

//! Payment network classification.
//!
//! Classification runs in two passes of increasing authority. The weak pass
//! searches the whole raw payload for a brand token. The authoritative pass
//! walks the merchant-account templates in ascending tag order and matches
//! the embedded network identifier (GUID); every hit there overwrites the
//! platform decided so far, so the last template in ascending order wins.

use tracing::debug;

use crate::models::Platform;

use super::template;
use super::tlv::TagMap;

/// Network identifier (GUID) sub-tag inside a merchant-account template.
pub const NETWORK_ID_SUBTAG: &str = "00";

/// First brand token found in `text`, in fixed priority order.
fn match_brand(text: &str) -> Option<Platform> {
    let lower = text.to_lowercase();
    Platform::BRANDS
        .iter()
        .find(|(_, token)| lower.contains(token))
        .map(|(platform, _)| *platform)
}

/// Weak pass: brand-token search over the entire raw payload.
pub fn classify_weak(payload: &str) -> Platform {
    match match_brand(payload) {
        Some(platform) => {
            debug!(%platform, "weak classification from raw payload");
            platform
        }
        None => Platform::Unknown,
    }
}

/// Authoritative pass over the merchant-account templates.
///
/// Starts from `current` and lets every GUID match overwrite it; no early
/// exit, so with several matching templates the highest tag decides.
pub fn classify_authoritative(map: &TagMap, current: Platform) -> Platform {
    let mut platform = current;
    for (tag, sub) in template::merchant_accounts(map) {
        let Some(guid) = sub.get(NETWORK_ID_SUBTAG) else {
            continue;
        };
        if let Some(found) = match_brand(guid) {
            debug!(%tag, %found, "network identifier match");
            platform = found;
        }
    }
    platform
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emv::tlv;

    #[test]
    fn test_weak_pass_priority_order() {
        assert_eq!(classify_weak("...NEQUI..."), Platform::Nequi);
        assert_eq!(classify_weak("pse-Bancolombia-qr"), Platform::Bancolombia);
        // Nequi appears later in the text but earlier in priority.
        assert_eq!(classify_weak("daviplata nequi"), Platform::Nequi);
        assert_eq!(classify_weak("nothing here"), Platform::Unknown);
    }

    #[test]
    fn test_authoritative_overrides_weak() {
        // Raw text names Nequi, but the template GUID names Daviplata.
        let payload = "26170013com.daviplata5905nequi";
        let map = tlv::decode(payload);
        let weak = classify_weak(payload);
        assert_eq!(weak, Platform::Nequi);
        assert_eq!(
            classify_authoritative(&map, weak),
            Platform::Daviplata
        );
    }

    #[test]
    fn test_last_template_wins() {
        let payload = "261300096co.nequi27190015com.bancolombia";
        let map = tlv::decode(payload);
        assert_eq!(
            classify_authoritative(&map, Platform::Unknown),
            Platform::Bancolombia
        );
    }

    #[test]
    fn test_template_without_guid_keeps_current() {
        let map = tlv::decode("2608010412345905nequi");
        assert_eq!(
            classify_authoritative(&map, Platform::Nequi),
            Platform::Nequi
        );
    }
}

//! Tag-Length-Value decoding for merchant-presented QR payloads.
//!
//! The text format is a flat sequence of `TTLLVVV...` units: a 2-digit tag,
//! a 2-digit decimal length, then that many characters of value. Decoding is
//! total - malformed or truncated input yields a partial map, never an error.

use indexmap::IndexMap;

/// Insertion-ordered tag-to-value mapping for one TLV level.
///
/// Tags are opaque 2-character keys. Duplicate tags are last-write-wins.
pub type TagMap = IndexMap<String, String>;

/// Decode a flat TLV buffer into a tag map.
///
/// Scans left to right, consuming `tag` (2 chars), `length` (2 decimal
/// chars), then `length` characters of value. Stops quietly at the first
/// point where a unit header cannot be read or the length is non-numeric;
/// a declared length past the end of the input takes whatever remains.
pub fn decode(text: &str) -> TagMap {
    let chars: Vec<char> = text.chars().collect();
    let mut map = TagMap::new();
    let mut i = 0;

    while i + 2 <= chars.len() {
        let tag: String = chars[i..i + 2].iter().collect();
        i += 2;

        if i + 2 > chars.len() {
            // Tag with no length field: discard and stop.
            break;
        }
        let len_text: String = chars[i..i + 2].iter().collect();
        i += 2;

        let length = match len_text.parse::<usize>() {
            Ok(n) => n,
            Err(_) => break,
        };

        let end = (i + length).min(chars.len());
        let value: String = chars[i..end].iter().collect();
        i = end;

        map.insert(tag, value);
    }

    map
}

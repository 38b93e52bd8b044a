//! URL path segment encoding.
//!
//! Catalog names (workspaces, stores, layers, styles) become path segments
//! in REST URLs. Names may contain spaces or slashes, so each one is
//! percent-encoded into a single segment. Colons are left alone; qualified
//! names like `topp:states` are passed through as GeoServer expects.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that must be percent-encoded in a path segment.
const SEGMENT_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\');

/// Percent-encode a catalog name into a single URL path segment.
///
/// # Examples
///
/// ```
/// use geoserver_rest::paths::encode_segment;
///
/// assert_eq!(encode_segment("topp:states"), "topp:states");
/// assert_eq!(encode_segment("my layer"), "my%20layer");
/// assert_eq!(encode_segment("a/b"), "a%2Fb");
/// ```
#[must_use]
pub fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT_ESCAPE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(encode_segment("roads"), "roads");
        assert_eq!(encode_segment("sf:roads"), "sf:roads");
        assert_eq!(encode_segment("dem.tif"), "dem.tif");
    }

    #[test]
    fn spaces_encoded() {
        assert_eq!(encode_segment("tasmania roads"), "tasmania%20roads");
    }

    #[test]
    fn slashes_stay_in_one_segment() {
        let encoded = encode_segment("a/b\\c");
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('\\'));
    }

    #[test]
    fn percent_sign_encoded() {
        assert_eq!(encode_segment("50%"), "50%25");
    }

    #[test]
    fn query_chars_encoded() {
        let encoded = encode_segment("a?b#c");
        assert!(!encoded.contains('?'));
        assert!(!encoded.contains('#'));
    }

    #[test]
    fn unicode_name() {
        let encoded = encode_segment("höhe karte");
        assert!(encoded.is_ascii());
    }
}

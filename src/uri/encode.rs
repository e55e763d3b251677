//! Component percent-encoding module
//!
//! Encode sets for the two URI components values get substituted into.
//! Query values are encoded aggressively (everything outside the unreserved
//! set), so a literal `+` becomes `%2B` and survives the server's
//! form-decoding. Path segments keep pchar characters, so a literal `+` in
//! a path stays as-is while a space still becomes `%20`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Characters encoded when substituting a value into a query component:
/// everything except unreserved (ALPHA / DIGIT / "-" / "." / "_" / "~")
pub const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Characters encoded when substituting a value into a path segment:
/// everything that is not a pchar (sub-delims such as `+` stay literal)
pub const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode a value for use as a query parameter value
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Percent-encode a value for use as a path segment
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::query::decode_component;

    #[test]
    fn test_query_value_encodes_plus_and_colon() {
        assert_eq!(
            encode_query_value("2022-11-20T00:00:00+09:00"),
            "2022-11-20T00%3A00%3A00%2B09%3A00"
        );
    }

    #[test]
    fn test_query_value_encodes_space_as_percent20() {
        // Never '+': that would decode back to a space only by convention
        assert_eq!(encode_query_value("a b"), "a%20b");
    }

    #[test]
    fn test_query_value_keeps_unreserved() {
        assert_eq!(encode_query_value("AZaz09-._~"), "AZaz09-._~");
    }

    #[test]
    fn test_path_segment_keeps_literal_plus() {
        assert_eq!(encode_path_segment("hotel+list"), "hotel+list");
        assert_eq!(encode_path_segment("New York"), "New%20York");
    }

    #[test]
    fn test_round_trip_ascii() {
        for s in ["hello", "a=b&c", "50% off", "1+1=2", "q?x#y"] {
            assert_eq!(decode_component(&encode_query_value(s)).unwrap(), s);
        }
    }

    #[test]
    fn test_round_trip_unicode() {
        for s in ["テスト", "naïve café", "日本語とemoji🎌", "Grüße"] {
            assert_eq!(decode_component(&encode_query_value(s)).unwrap(), s);
        }
    }
}

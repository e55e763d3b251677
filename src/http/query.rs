//! Query-string parsing module
//!
//! Decodes `application/x-www-form-urlencoded` style query strings: `+` in a
//! component is a space, `%XX` is percent-decoded. Decoding is strict — a
//! dangling or non-hex percent sequence is an error rather than being passed
//! through, so callers can map it to a 400 instead of partially decoding.

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// Query-string decoding and lookup errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("missing required query parameter '{0}'")]
    MissingParameter(String),
    #[error("malformed percent-encoding in query component '{0}'")]
    InvalidEncoding(String),
}

/// Look up a query parameter by name and return its decoded value
///
/// The first occurrence wins when a key is repeated. A pair without `=` is
/// treated as a key with an empty value.
pub fn lookup(query: &str, name: &str) -> Result<String, QueryError> {
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(raw_key)? == name {
            return decode_component(raw_value);
        }
    }
    Err(QueryError::MissingParameter(name.to_string()))
}

/// Decode a single query component (key or value)
///
/// Applies the form-encoding convention (`+` decodes to a space) before
/// percent-decoding. Rejects malformed percent sequences and non-UTF-8
/// decoded bytes.
pub fn decode_component(raw: &str) -> Result<String, QueryError> {
    validate_percent_sequences(raw)?;

    let unplussed = raw.replace('+', " ");
    percent_decode_str(&unplussed)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| QueryError::InvalidEncoding(raw.to_string()))
}

/// Require every `%` to be followed by exactly two hex digits
///
/// `percent_decode_str` passes malformed sequences through untouched; the
/// policy here is to reject them instead.
fn validate_percent_sequences(raw: &str) -> Result<(), QueryError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(QueryError::InvalidEncoding(raw.to_string()));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_plain_value() {
        assert_eq!(lookup("requestQuery=hello", "requestQuery").unwrap(), "hello");
    }

    #[test]
    fn test_lookup_among_other_params() {
        let q = "first=1&requestQuery=hello&last=9";
        assert_eq!(lookup(q, "requestQuery").unwrap(), "hello");
    }

    #[test]
    fn test_lookup_missing_parameter() {
        assert_eq!(
            lookup("otherParam=x", "requestQuery"),
            Err(QueryError::MissingParameter("requestQuery".to_string()))
        );
        assert_eq!(
            lookup("", "requestQuery"),
            Err(QueryError::MissingParameter("requestQuery".to_string()))
        );
    }

    #[test]
    fn test_lookup_first_occurrence_wins() {
        let q = "requestQuery=first&requestQuery=second";
        assert_eq!(lookup(q, "requestQuery").unwrap(), "first");
    }

    #[test]
    fn test_lookup_key_without_equals_has_empty_value() {
        assert_eq!(lookup("requestQuery", "requestQuery").unwrap(), "");
    }

    #[test]
    fn test_decode_plus_is_space() {
        // Form-encoding convention: the reason a raw ISO-8601 offset breaks
        assert_eq!(
            decode_component("2022-11-20T00:00:00+09:00").unwrap(),
            "2022-11-20T00:00:00 09:00"
        );
    }

    #[test]
    fn test_decode_percent_2b_is_literal_plus() {
        assert_eq!(
            decode_component("2022-11-20T00:00:00%2B09:00").unwrap(),
            "2022-11-20T00:00:00+09:00"
        );
    }

    #[test]
    fn test_decode_utf8_multibyte() {
        assert_eq!(
            decode_component("%E3%83%86%E3%82%B9%E3%83%88").unwrap(),
            "テスト"
        );
    }

    #[test]
    fn test_decode_rejects_dangling_percent() {
        assert!(matches!(
            decode_component("abc%2"),
            Err(QueryError::InvalidEncoding(_))
        ));
        assert!(matches!(
            decode_component("abc%"),
            Err(QueryError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_hex_digits() {
        assert!(matches!(
            decode_component("abc%ZZdef"),
            Err(QueryError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(matches!(
            decode_component("%FF%FE"),
            Err(QueryError::InvalidEncoding(_))
        ));
    }
}

//! URI builder module
//!
//! Builds request URIs from a path and query parameters, with optional
//! `{name}` template placeholders. The distinction matters for encoding:
//!
//! - A raw value passed to [`UriBuilder::query_param`] is inserted verbatim.
//!   A literal `+` in it reaches the wire unencoded and the server's
//!   form-decoding turns it into a space. A pre-encoded `%2B` passes through
//!   and decodes back to `+`.
//! - A value substituted for a placeholder is percent-encoded for the
//!   component it lands in, so a `+` in a query value becomes `%2B`.
//!
//! Substitution is all-or-nothing: a placeholder without a value fails with
//! [`UriBuildError::MissingVariable`], never a partial URI.

use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, AsciiSet};
use thiserror::Error;

use super::encode::{PATH_SEGMENT, QUERY_VALUE};

/// URI template expansion errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UriBuildError {
    #[error("no value supplied for URI template variable '{0}'")]
    MissingVariable(String),
    #[error("unterminated URI template variable in '{0}'")]
    UnclosedVariable(String),
}

/// Client-side URI builder with template placeholder support
#[derive(Debug, Clone)]
pub struct UriBuilder {
    path: String,
    query: Vec<(String, String)>,
}

impl UriBuilder {
    /// Start a builder from a path, which may itself contain placeholders
    pub fn from_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter
    ///
    /// The value is stored as given: either a literal (inserted verbatim at
    /// build time) or a `{name}` placeholder (encoded at substitution time).
    #[must_use]
    pub fn query_param(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Build without substitution values
    ///
    /// Fails if any placeholder remains in the path or query.
    pub fn build(&self) -> Result<String, UriBuildError> {
        self.render(&mut |name| Err(UriBuildError::MissingVariable(name.to_string())))
    }

    /// Build with positional substitution values
    ///
    /// Placeholders consume values in order of appearance (path first, then
    /// query parameters). Too few values is an error naming the placeholder
    /// that went unfilled.
    pub fn build_with(&self, values: &[&str]) -> Result<String, UriBuildError> {
        let mut remaining = values.iter();
        self.render(&mut |name| {
            remaining
                .next()
                .map(ToString::to_string)
                .ok_or_else(|| UriBuildError::MissingVariable(name.to_string()))
        })
    }

    /// Build with named substitution values
    pub fn build_with_map(&self, vars: &HashMap<&str, &str>) -> Result<String, UriBuildError> {
        self.render(&mut |name| {
            vars.get(name)
                .map(ToString::to_string)
                .ok_or_else(|| UriBuildError::MissingVariable(name.to_string()))
        })
    }

    /// Render path and query, expanding placeholders via `resolve`
    fn render(
        &self,
        resolve: &mut dyn FnMut(&str) -> Result<String, UriBuildError>,
    ) -> Result<String, UriBuildError> {
        let mut out = expand(&self.path, PATH_SEGMENT, resolve)?;
        for (i, (name, value)) in self.query.iter().enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            out.push_str(&expand(name, QUERY_VALUE, resolve)?);
            out.push('=');
            out.push_str(&expand(value, QUERY_VALUE, resolve)?);
        }
        Ok(out)
    }
}

/// Expand `{name}` placeholders in a template
///
/// Text outside placeholders is copied verbatim; substituted values are
/// percent-encoded with the component's encode set.
fn expand(
    template: &str,
    set: &'static AsciiSet,
    resolve: &mut dyn FnMut(&str) -> Result<String, UriBuildError>,
) -> Result<String, UriBuildError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            return Err(UriBuildError::UnclosedVariable(template.to_string()));
        };
        let value = resolve(&after[..end])?;
        out.push_str(&utf8_percent_encode(&value, set).to_string());
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISO_TS: &str = "2022-11-20T00:00:00+09:00";

    #[test]
    fn test_literal_value_passes_through_verbatim() {
        // Raw insertion: the '+' is NOT encoded and will decode as a space
        let uri = UriBuilder::from_path("/api/sample")
            .query_param("requestQuery", ISO_TS)
            .build()
            .unwrap();
        assert_eq!(uri, "/api/sample?requestQuery=2022-11-20T00:00:00+09:00");
    }

    #[test]
    fn test_pre_encoded_value_is_not_double_encoded() {
        let uri = UriBuilder::from_path("/api/sample")
            .query_param("requestQuery", "2022-11-20T00:00:00%2B09:00")
            .build()
            .unwrap();
        assert_eq!(uri, "/api/sample?requestQuery=2022-11-20T00:00:00%2B09:00");
    }

    #[test]
    fn test_template_substitution_encodes_plus() {
        let uri = UriBuilder::from_path("/api/sample")
            .query_param("requestQuery", "{requestQuery}")
            .build_with(&[ISO_TS])
            .unwrap();
        assert_eq!(
            uri,
            "/api/sample?requestQuery=2022-11-20T00%3A00%3A00%2B09%3A00"
        );
    }

    #[test]
    fn test_template_substitution_encodes_unicode() {
        let uri = UriBuilder::from_path("/api/sample")
            .query_param("requestQuery", "{requestQuery}")
            .build_with(&["テスト"])
            .unwrap();
        assert_eq!(
            uri,
            "/api/sample?requestQuery=%E3%83%86%E3%82%B9%E3%83%88"
        );
    }

    #[test]
    fn test_path_placeholder_uses_path_segment_rules() {
        // A literal '+' in the path template stays as-is; a space in the
        // substituted value becomes %20; the query value '+' becomes %2B
        let uri = UriBuilder::from_path("/hotel+list/{city}")
            .query_param("q", "{q}")
            .build_with(&["New York", "foo+bar"])
            .unwrap();
        assert_eq!(uri, "/hotel+list/New%20York?q=foo%2Bbar");
    }

    #[test]
    fn test_multiple_placeholders_via_map() {
        let vars = HashMap::from([
            ("startDateTime", "2022-11-20T00:00:00+09:00"),
            ("endDateTime", "2022-11-30T00:00:00+09:00"),
        ]);
        let uri = UriBuilder::from_path("/api/sample")
            .query_param("startDateTime", "{startDateTime}")
            .query_param("endDateTime", "{endDateTime}")
            .build_with_map(&vars)
            .unwrap();
        assert_eq!(
            uri,
            "/api/sample?startDateTime=2022-11-20T00%3A00%3A00%2B09%3A00\
             &endDateTime=2022-11-30T00%3A00%3A00%2B09%3A00"
        );
    }

    #[test]
    fn test_map_missing_variable_names_placeholder() {
        let vars = HashMap::from([("startDateTime", "2022-11-20T00:00:00+09:00")]);
        let err = UriBuilder::from_path("/api/sample")
            .query_param("startDateTime", "{startDateTime}")
            .query_param("endDateTime", "{endDateTime}")
            .build_with_map(&vars)
            .unwrap_err();
        assert_eq!(err, UriBuildError::MissingVariable("endDateTime".to_string()));
    }

    #[test]
    fn test_positional_too_few_values() {
        let err = UriBuilder::from_path("/api/sample")
            .query_param("startDateTime", "{startDateTime}")
            .query_param("endDateTime", "{endDateTime}")
            .build_with(&["2022-11-20T00:00:00+09:00"])
            .unwrap_err();
        assert_eq!(err, UriBuildError::MissingVariable("endDateTime".to_string()));
    }

    #[test]
    fn test_build_with_unfilled_placeholder_fails() {
        let err = UriBuilder::from_path("/api/sample")
            .query_param("requestQuery", "{requestQuery}")
            .build()
            .unwrap_err();
        assert_eq!(err, UriBuildError::MissingVariable("requestQuery".to_string()));
    }

    #[test]
    fn test_unclosed_placeholder_fails() {
        let err = UriBuilder::from_path("/api/sample")
            .query_param("requestQuery", "{requestQuery")
            .build_with(&["x"])
            .unwrap_err();
        assert_eq!(
            err,
            UriBuildError::UnclosedVariable("{requestQuery".to_string())
        );
    }

    #[test]
    fn test_no_query_params_means_no_question_mark() {
        let uri = UriBuilder::from_path("/api/sample").build().unwrap();
        assert_eq!(uri, "/api/sample");
    }
}

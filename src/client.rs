//! Client-side request transform pipeline
//!
//! An ordered list of transforms applied to the fully serialized request URI
//! immediately before transmission. By that point the template-vs-literal
//! distinction of [`crate::uri::UriBuilder`] is erased, which is exactly
//! what a blanket rewrite like [`encode_plus`] needs. This is a client/test
//! concern; the server never sees it.

/// A single URI rewrite applied before transmission
pub type UriTransform = Box<dyn Fn(String) -> String + Send + Sync>;

/// Ordered pipeline of URI transforms
#[derive(Default)]
pub struct TransformPipeline {
    transforms: Vec<UriTransform>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transform to the end of the pipeline
    #[must_use]
    pub fn with<F>(mut self, transform: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Apply all transforms in order
    pub fn apply(&self, uri: String) -> String {
        self.transforms.iter().fold(uri, |uri, t| t(uri))
    }
}

/// Rewrite every literal `+` in a serialized URI to `%2B`
///
/// Workaround for raw values concatenated into the query string: a literal
/// `+` would otherwise decode server-side as a space. The output contains no
/// `+`, so applying the rewrite twice changes nothing (no `%252B`).
pub fn encode_plus(uri: String) -> String {
    uri.replace('+', "%2B")
}

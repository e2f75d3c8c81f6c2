//! Error types for URL transformations.

use thiserror::Error;

/// Errors that can occur while decoding a URL for transformation.
///
/// Encoding never fails, so every error originates at the decode boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlTransformError {
    /// The input is neither a valid absolute URL nor a bare path.
    #[error("Invalid URL {input:?}: {reason}")]
    ParseError {
        /// The original input, unchanged.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
}

impl UrlTransformError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        UrlTransformError::ParseError {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// The input that failed to decode.
    pub fn input(&self) -> &str {
        match self {
            UrlTransformError::ParseError { input, .. } => input,
        }
    }
}

/// Attach the offending input to a `url::ParseError`.
pub(crate) fn from_url_error(input: &str, err: url::ParseError) -> UrlTransformError {
    UrlTransformError::parse(input, err.to_string())
}

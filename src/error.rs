//! Error types for URL parsing operations.

use thiserror::Error;

/// Errors that can occur while parsing a URL string.
///
/// Formatting never fails, and building a [`crate::ParsedUrl`] from a
/// component map never fails either: unrecognized keys are skipped and
/// individual component values are taken at face value. The only raised
/// condition is a string the syntax parser cannot decompose.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// The input string could not be decomposed into URL components.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),
}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        UrlError::MalformedUrl(err.to_string())
    }
}

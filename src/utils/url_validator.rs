//! Target URL validation.
//!
//! Accepts any absolute URL the WHATWG parser understands. The URL is stored
//! exactly as submitted; parsing is only used to reject malformed input and to
//! produce an ASCII-safe `Location` header.

use axum::http::HeaderValue;
use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Errors produced while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Checks that `input` is a well-formed absolute URL.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input and
/// [`UrlValidationError::InvalidFormat`] for anything that does not parse
/// without a base URL (relative paths, bare words, bad hosts).
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path").is_ok());
/// assert!(validate_url("not-a-url").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    Ok(Url::parse(input)?)
}

/// Builds the `Location` header value for a stored target URL.
///
/// Percent-encodes non-ASCII characters via the URL serializer. A stored value
/// that no longer parses is used as-is if it is still a valid header value.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the value cannot be sent as a header,
/// e.g. a hand-edited document with control characters in the host.
pub fn redirect_target(stored: &str) -> Result<HeaderValue, AppError> {
    let target = Url::parse(stored)
        .map(String::from)
        .unwrap_or_else(|_| stored.to_string());

    HeaderValue::try_from(target).map_err(|_| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "url": stored }),
        )
    })
}

//! Short identifier generation and custom alias validation.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use serde_json::json;

/// Length of generated short identifiers.
pub const SHORT_ID_LENGTH: usize = 6;

/// Maximum length of a custom alias.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would shadow fixed routes.
const RESERVED_ALIASES: &[&str] = &["api", "health", "analytics"];

/// Generates a random short identifier.
///
/// Draws [`SHORT_ID_LENGTH`] characters independently from `A-Z`, `a-z` and
/// `0-9`. Uniqueness is not guaranteed; callers check the registry and retry.
pub fn generate_short_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SHORT_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a user-provided custom alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            format!("Custom alias must be 1-{MAX_ALIAS_LENGTH} characters"),
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

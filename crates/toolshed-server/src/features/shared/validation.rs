//! Shared validation utilities
//!
//! Common input checks for commands and queries.

use thiserror::Error;

/// Errors that can occur during URL validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("{field_name} is required")]
    Required { field_name: String },

    #[error("{field_name} URL is invalid: must start with http:// or https://")]
    InvalidFormat { field_name: String },
}

/// Errors that can occur during limit validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitValidationError {
    #[error("{field_name} must be between {min} and {max}")]
    OutOfRange {
        field_name: String,
        min: i64,
        max: i64,
    },
}

/// Validate an http(s) URL field
///
/// # Rules
/// - Must not be empty (after trimming whitespace)
/// - Must start with `http://` or `https://` followed by a host
pub fn validate_url(url: &str, field_name: &str) -> Result<(), UrlValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(UrlValidationError::Required {
            field_name: field_name.to_string(),
        });
    }

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err(UrlValidationError::InvalidFormat {
            field_name: field_name.to_string(),
        }),
    }
}

/// Resolve an optional limit against a default and inclusive bounds
pub fn validate_limit(
    limit: Option<i64>,
    default: i64,
    min: i64,
    max: i64,
    field_name: &str,
) -> Result<i64, LimitValidationError> {
    let limit = limit.unwrap_or(default);
    if limit < min || limit > max {
        return Err(LimitValidationError::OutOfRange {
            field_name: field_name.to_string(),
            min,
            max,
        });
    }
    Ok(limit)
}

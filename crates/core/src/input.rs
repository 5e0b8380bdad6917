//! Parsing helpers for raw form values.
//!
//! Drafts coming from the presentation layer carry strings exactly as typed.
//! These helpers turn them into typed values or a `DomainError::InvalidInput`
//! naming the offending field.

use crate::error::{DomainError, DomainResult};

/// Returns the trimmed value, or `InvalidInput` if it is absent or blank.
pub fn required<'a>(field: &str, raw: Option<&'a str>) -> DomainResult<&'a str> {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::invalid_input(format!("{field} is required"))),
    }
}

/// Parse a required non-negative integer (stock counts, demand).
pub fn required_count(field: &str, raw: Option<&str>) -> DomainResult<u32> {
    let value = required(field, raw)?;
    value.parse::<u32>().map_err(|_| {
        DomainError::invalid_input(format!("{field} must be a non-negative integer, got {value:?}"))
    })
}

/// Parse a required strictly positive integer (transfer quantities).
pub fn required_positive(field: &str, raw: Option<&str>) -> DomainResult<u32> {
    let value = required(field, raw)?;
    match value.parse::<u32>() {
        Ok(0) => Err(DomainError::invalid_input(format!("{field} must be positive"))),
        Ok(v) => Ok(v),
        Err(_) => Err(DomainError::invalid_input(format!(
            "{field} must be a positive integer, got {value:?}"
        ))),
    }
}

/// Parse an optional integer; absent or unparsable values yield `None`.
pub fn optional_count(raw: Option<&str>) -> Option<u32> {
    raw.map(str::trim).and_then(|v| v.parse::<u32>().ok())
}

/// Parse an optional non-negative float; absent or unparsable values yield `None`.
pub fn optional_distance(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d >= 0.0)
}

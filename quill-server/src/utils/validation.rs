//! Input validation helpers
//!
//! Centralized text length constants and validation functions. The store
//! enforces no schema, so these are the only input checks the handlers run.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Blog titles
pub const MAX_TITLE_LEN: usize = 300;

/// Long-form blog bodies
pub const MAX_BODY_LEN: usize = 100_000;

/// Category names
pub const MAX_CATEGORY_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Record ids ("table:key" form)
pub const MAX_ID_LEN: usize = 100;

/// Search terms
pub const MAX_QUERY_LEN: usize = 200;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

//! Input validation for snippet operations.

use crate::error::CoreError;

/// Validate snippet content before it reaches the store.
///
/// Content is opaque text. It must not be empty, and it must not contain
/// NUL characters, which PostgreSQL `TEXT` cannot store. There is no
/// length cap at this layer.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.is_empty() {
        return Err(CoreError::Validation(
            "content must not be empty".to_string(),
        ));
    }
    if content.contains('\0') {
        return Err(CoreError::Validation(
            "content must not contain NUL characters".to_string(),
        ));
    }
    Ok(())
}

/// Validate a listing limit. Must be a positive integer.
pub fn validate_limit(limit: i64) -> Result<(), CoreError> {
    if limit < 1 {
        return Err(CoreError::Validation(format!(
            "limit must be >= 1, got {limit}"
        )));
    }
    Ok(())
}

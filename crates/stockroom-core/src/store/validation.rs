//! Input validation for store operations.
//!
//! Validation errors are recoverable; interactive callers re-prompt,
//! one-shot callers abort the operation.

use crate::error::{Result, StockroomError};

/// Maximum length for category and product names.
pub const MAX_NAME_LENGTH: usize = 32;

/// Validate a category or product name: non-empty after trimming, at most
/// [`MAX_NAME_LENGTH`] characters.
pub fn validate_name(label: &str, name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StockroomError::Validation(format!(
            "{} cannot be empty",
            label
        )));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(StockroomError::Validation(format!(
            "{} must be at most {} characters (got {})",
            label,
            MAX_NAME_LENGTH,
            trimmed.chars().count()
        )));
    }
    Ok(())
}

/// Validate a username: non-empty after trimming.
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(StockroomError::Validation(
            "Username cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate an email address: a local part, an `@`, and a domain with a dot.
pub fn validate_email(email: &str) -> Result<()> {
    let invalid = || StockroomError::Validation(format!("Invalid email address: {}", email));

    let Some((local, domain)) = email.rsplit_once('@') else {
        return Err(invalid());
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(invalid());
    }
    Ok(())
}

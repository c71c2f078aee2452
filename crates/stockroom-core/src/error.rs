//! Error types for Stockroom core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-facing messages. Constraint failures reported by SQLite are
//! classified into domain errors here so callers never match on raw
//! database error strings.

use thiserror::Error;

/// Result type alias for Stockroom operations.
pub type Result<T> = std::result::Result<T, StockroomError>;

/// Core error type for Stockroom operations.
#[derive(Debug, Error)]
pub enum StockroomError {
    /// Empty or malformed input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A category or product name is already taken
    #[error("Name already in use: {0}")]
    DuplicateName(String),

    /// A user account already exists for this email
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// A referenced category or product does not exist
    #[error("Invalid reference: {0}")]
    ForeignKey(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Operation requires an authenticated user
    #[error("You must be logged in")]
    NotAuthenticated,

    /// Authenticated user lacks the required role
    #[error("Access denied")]
    AccessDenied,
}

impl From<rusqlite::Error> for StockroomError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(ffi_err, ref message) = err {
            if ffi_err.code == rusqlite::ErrorCode::ConstraintViolation {
                let detail = message.clone().unwrap_or_default();
                if ffi_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY {
                    return StockroomError::ForeignKey(detail);
                }
                if ffi_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE {
                    if detail.contains("users.email") {
                        return StockroomError::DuplicateEmail(detail);
                    }
                    return StockroomError::DuplicateName(detail);
                }
            }
        }
        StockroomError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for StockroomError {
    fn from(err: std::io::Error) -> Self {
        StockroomError::Storage(err.to_string())
    }
}

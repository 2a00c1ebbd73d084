//! Error handling utilities for repositories

use beam_core::error::DomainError;
use beam_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create an "account not found" error
pub fn account_not_found(id: Snowflake) -> DomainError {
    DomainError::AccountNotFound(id)
}

/// Create a "video not found" error
pub fn video_not_found(id: Snowflake) -> DomainError {
    DomainError::VideoNotFound(id)
}

/// Create a "broadcast not found" error
pub fn stream_not_found(id: Snowflake) -> DomainError {
    DomainError::StreamNotFound(id)
}

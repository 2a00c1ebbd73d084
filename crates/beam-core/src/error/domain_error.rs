//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{MediaUriError, Snowflake};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Broadcast not found: {0}")]
    StreamNotFound(Snowflake),

    #[error("Video not found: {0}")]
    VideoNotFound(Snowflake),

    #[error("Account not found: {0}")]
    AccountNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Invalid media uri: {0}")]
    InvalidMediaUri(#[from] MediaUriError),

    #[error("Too many tags: max {max}")]
    TooManyTags { max: usize },

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already broadcasting")]
    AlreadyBroadcasting,

    #[error("Already watching a broadcast")]
    AlreadyWatching,

    #[error("Login id already in use")]
    LoginIdTaken,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Broadcast has ended")]
    BroadcastEnded,

    #[error("No active broadcast session")]
    NotBroadcasting,

    #[error("No active viewer session")]
    NotWatching,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::StreamNotFound(_) => "UNKNOWN_BROADCAST",
            Self::VideoNotFound(_) => "UNKNOWN_VIDEO",
            Self::AccountNotFound(_) => "UNKNOWN_ACCOUNT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidTitle(_) => "INVALID_TITLE",
            Self::InvalidMediaUri(_) => "INVALID_MEDIA_URI",
            Self::TooManyTags { .. } => "TOO_MANY_TAGS",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Conflict
            Self::AlreadyBroadcasting => "ALREADY_BROADCASTING",
            Self::AlreadyWatching => "ALREADY_WATCHING",
            Self::LoginIdTaken => "LOGIN_ID_TAKEN",

            // Business Rules
            Self::BroadcastEnded => "BROADCAST_ENDED",
            Self::NotBroadcasting => "NOT_BROADCASTING",
            Self::NotWatching => "NOT_WATCHING",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StreamNotFound(_) | Self::VideoNotFound(_) | Self::AccountNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidTitle(_)
                | Self::InvalidMediaUri(_)
                | Self::TooManyTags { .. }
                | Self::WeakPassword(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyBroadcasting | Self::AlreadyWatching | Self::LoginIdTaken
        )
    }
}

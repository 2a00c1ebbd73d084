//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub account: AccountResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        account: AccountResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            account,
        }
    }
}

/// Account response
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub login_id: String,
    pub name: String,
    pub picture_url: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Live Stream Responses
// ============================================================================

/// A live broadcast directory entry
#[derive(Debug, Clone, Serialize)]
pub struct LiveStreamResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub user_name: String,
    pub user_profile_url: String,
    pub tags: Vec<String>,
    pub started_at: DateTime<Utc>,
}

/// Broadcaster session response
#[derive(Debug, Clone, Serialize)]
pub struct BroadcastSessionResponse {
    pub broadcast_id: String,
    pub stream_key: String,
    pub ingest_url: String,
}

/// Viewer session response
#[derive(Debug, Clone, Serialize)]
pub struct WatchSessionResponse {
    pub broadcast_id: String,
    pub playback_url: String,
}

// ============================================================================
// Video / Profile Responses
// ============================================================================

/// Video response
#[derive(Debug, Clone, Serialize)]
pub struct VideoResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub url: String,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

/// Thumbnail response
#[derive(Debug, Clone, Serialize)]
pub struct ThumbnailResponse {
    pub url: String,
}

/// Profile response with an owned video snapshot
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub name: String,
    pub picture_url: String,
    pub videos: Vec<VideoResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true, true);
        assert_eq!(ready.status, "ready");
        assert_eq!(ready.checks.database, "healthy");
        assert_eq!(ready.checks.redis, "healthy");

        let not_ready = ReadinessResponse::ready(true, false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.redis, "unhealthy");
    }

    #[test]
    fn test_auth_response_token_type() {
        let account = AccountResponse {
            id: "1".to_string(),
            login_id: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            picture_url: String::new(),
            created_at: Utc::now(),
        };
        let auth = AuthResponse::new("a".to_string(), "r".to_string(), 900, account);
        assert_eq!(auth.token_type, "Bearer");
        assert_eq!(auth.expires_in, 900);
    }
}

//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Credential login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 64, message = "Login id must be 3-64 characters"))]
    pub login_id: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Broadcast Requests
// ============================================================================

/// Start broadcast request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartBroadcastRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    /// Optional directory tags
    #[validate(length(max = 10, message = "At most 10 tags"))]
    #[serde(default)]
    pub tags: Vec<String>,
}

// ============================================================================
// Video Requests
// ============================================================================

/// Thumbnail creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThumbnailRequest {
    #[validate(length(min = 1, message = "Video uri must not be empty"))]
    pub video_uri: String,
}

/// Video upload request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddVideoRequest {
    #[validate(length(min = 1, message = "Video uri must not be empty"))]
    pub video_uri: String,

    #[validate(length(min = 1, message = "Thumbnail url must not be empty"))]
    pub thumbnail_url: String,

    #[validate(length(min = 1, max = 120, message = "Title must be 1-120 characters"))]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            login_id: "ada@example.com".to_string(),
            password: "SecurePass1".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = LoginRequest {
            login_id: "ab".to_string(),
            password: "SecurePass1".to_string(),
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn test_start_broadcast_validation() {
        let ok = StartBroadcastRequest {
            title: "Morning run".to_string(),
            tags: vec!["sport".to_string()],
        };
        assert!(ok.validate().is_ok());

        let empty = StartBroadcastRequest {
            title: String::new(),
            tags: Vec::new(),
        };
        assert!(empty.validate().is_err());

        let too_many = StartBroadcastRequest {
            title: "t".to_string(),
            tags: (0..11).map(|i| format!("tag{i}")).collect(),
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_add_video_validation() {
        let ok = AddVideoRequest {
            video_uri: "file:///clips/run.mp4".to_string(),
            thumbnail_url: "https://cdn.test/t/run.jpg".to_string(),
            title: "Run".to_string(),
        };
        assert!(ok.validate().is_ok());

        let no_thumb = AddVideoRequest {
            video_uri: "file:///clips/run.mp4".to_string(),
            thumbnail_url: String::new(),
            title: "Run".to_string(),
        };
        assert!(no_thumb.validate().is_err());
    }

    #[test]
    fn test_tags_default_to_empty() {
        let request: StartBroadcastRequest =
            serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        assert!(request.tags.is_empty());
    }
}

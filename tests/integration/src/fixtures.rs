//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
        + std::process::id() as u64 * 10_000
}

/// An account seeded directly through the database layer
#[derive(Debug, Clone)]
pub struct SeededAccount {
    pub id: String,
    pub login_id: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub login_id: String,
    pub password: String,
}

impl LoginRequest {
    pub fn for_account(account: &SeededAccount) -> Self {
        Self {
            login_id: account.login_id.clone(),
            password: account.password.clone(),
        }
    }

    pub fn wrong_password(account: &SeededAccount) -> Self {
        Self {
            login_id: account.login_id.clone(),
            password: "WrongPass1".to_string(),
        }
    }
}

/// Refresh request
#[derive(Debug, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub account: AccountResponse,
}

/// Account response
#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub login_id: String,
    pub name: String,
    pub picture_url: String,
}

/// Thumbnail creation request
#[derive(Debug, Serialize)]
pub struct CreateThumbnailRequest {
    pub video_uri: String,
}

/// Thumbnail response
#[derive(Debug, Deserialize)]
pub struct ThumbnailResponse {
    pub url: String,
}

/// Video upload request
#[derive(Debug, Serialize)]
pub struct AddVideoRequest {
    pub video_uri: String,
    pub thumbnail_url: String,
    pub title: String,
}

impl AddVideoRequest {
    pub fn unique(thumbnail_url: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            video_uri: format!("https://cdn.test/up/clip{suffix}.mp4"),
            thumbnail_url: thumbnail_url.to_string(),
            title: format!("Test clip {suffix}"),
        }
    }
}

/// Video response
#[derive(Debug, Deserialize)]
pub struct VideoResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub url: String,
    pub time: String,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub name: String,
    pub picture_url: String,
    pub videos: Vec<VideoResponse>,
}

/// Wrapped list payload ({"data": [...]})
#[derive(Debug, Deserialize)]
pub struct DataList<T> {
    pub data: Vec<T>,
}

/// Wrapped scalar payload ({"data": ...})
#[derive(Debug, Deserialize)]
pub struct DataValue<T> {
    pub data: T,
}

/// Live stream directory entry
#[derive(Debug, Deserialize)]
pub struct LiveStreamEntry {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub user_name: String,
    pub user_profile_url: String,
    pub tags: Vec<String>,
}

/// Start broadcast request
#[derive(Debug, Serialize)]
pub struct StartBroadcastRequest {
    pub title: String,
    pub tags: Vec<String>,
}

impl StartBroadcastRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test broadcast {suffix}"),
            tags: vec!["integration".to_string()],
        }
    }
}

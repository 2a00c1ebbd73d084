//! Live stream database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the live_streams directory table
///
/// Rows exist only while a broadcast is live; tags are stored as a text
/// array column.
#[derive(Debug, Clone, FromRow)]
pub struct LiveStreamModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub thumbnail_url: String,
    pub user_name: String,
    pub user_profile_url: String,
    pub tags: Vec<String>,
    pub started_at: DateTime<Utc>,
}

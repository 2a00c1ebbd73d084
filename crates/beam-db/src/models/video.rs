//! Video database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the videos table
#[derive(Debug, Clone, FromRow)]
pub struct VideoModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub thumbnail_url: String,
    pub url: String,
    pub display_time: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

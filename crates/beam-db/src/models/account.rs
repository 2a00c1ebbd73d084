//! Account database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the accounts table
#[derive(Debug, Clone, FromRow)]
pub struct AccountModel {
    pub id: i64,
    pub login_id: String,
    pub name: String,
    pub picture_url: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl AccountModel {
    /// Check if account is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

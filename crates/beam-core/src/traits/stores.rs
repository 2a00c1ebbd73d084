//! Store traits (ports) - persistence interfaces the service layer
//! composes
//!
//! Implemented against PostgreSQL in the db crate.

use async_trait::async_trait;

use crate::entities::{Account, LiveStream, Video};
use crate::traits::RepoResult;
use crate::value_objects::Snowflake;

// ============================================================================
// Account Store
// ============================================================================

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Account>>;

    /// Find account by login id
    async fn find_by_login_id(&self, login_id: &str) -> RepoResult<Option<Account>>;

    /// Check if a login id is already taken
    async fn login_id_exists(&self, login_id: &str) -> RepoResult<bool>;

    /// Create a new account
    async fn create(&self, account: &Account, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Video Store
// ============================================================================

#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Persist a new video
    async fn insert(&self, video: &Video) -> RepoResult<()>;

    /// Find video by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Video>>;

    /// List a user's videos, newest first
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Video>>;

    /// Delete a video
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Broadcast Directory
// ============================================================================

/// Persistent directory of currently-live broadcasts
#[async_trait]
pub trait BroadcastDirectory: Send + Sync {
    /// List all live broadcasts, newest first
    async fn list_live(&self) -> RepoResult<Vec<LiveStream>>;

    /// Find a live broadcast by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<LiveStream>>;

    /// Find a user's live broadcast, if any
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<LiveStream>>;

    /// Add a broadcast to the directory
    async fn insert(&self, stream: &LiveStream) -> RepoResult<()>;

    /// Remove a broadcast from the directory
    async fn remove(&self, id: Snowflake) -> RepoResult<()>;
}

//! Broadcast and viewer session storage in Redis.
//!
//! At most one active broadcast session per broadcaster and one viewer
//! session per viewer. Sessions carry a TTL refreshed while the client is
//! alive, so crashed clients age out on their own.

use crate::pool::{RedisPool, RedisResult};
use beam_core::Snowflake;
use serde::{Deserialize, Serialize};

/// Key prefix for broadcast sessions (keyed by broadcaster user id)
const BROADCAST_SESSION_PREFIX: &str = "broadcast_session:";
/// Key prefix for viewer sessions (keyed by viewer user id)
const VIEWER_SESSION_PREFIX: &str = "viewer_session:";

/// Session TTL (refreshed by the session heartbeat)
const SESSION_TTL: u64 = 6 * 60 * 60;

/// Broadcast session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastState {
    /// Session created, ingest not yet confirmed
    Preparing,
    /// Broadcast is live and listed in the directory
    Live,
    /// Broadcast has ended; row kept only until cleanup
    Ended,
}

impl BroadcastState {
    /// Whether the broadcast is still running
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Ended)
    }
}

impl std::fmt::Display for BroadcastState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preparing => write!(f, "preparing"),
            Self::Live => write!(f, "live"),
            Self::Ended => write!(f, "ended"),
        }
    }
}

/// Stored broadcast session data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastSessionData {
    /// Broadcast (directory entry) id
    pub broadcast_id: Snowflake,
    /// Broadcaster user id
    pub user_id: Snowflake,
    /// Publish credential for the ingest endpoint
    pub stream_key: String,
    /// Lifecycle state
    pub state: BroadcastState,
    /// Session creation timestamp (Unix epoch seconds)
    pub started_at: i64,
}

impl BroadcastSessionData {
    /// Create new session data in the preparing state
    #[must_use]
    pub fn new(broadcast_id: Snowflake, user_id: Snowflake, stream_key: String) -> Self {
        Self {
            broadcast_id,
            user_id,
            stream_key,
            state: BroadcastState::Preparing,
            started_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Transition to live
    #[must_use]
    pub fn live(mut self) -> Self {
        self.state = BroadcastState::Live;
        self
    }
}

/// Stored viewer session data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerSessionData {
    /// Broadcast being watched
    pub broadcast_id: Snowflake,
    /// Viewer user id
    pub viewer_id: Snowflake,
    /// Join timestamp (Unix epoch seconds)
    pub joined_at: i64,
}

impl ViewerSessionData {
    /// Create new viewer session data
    #[must_use]
    pub fn new(broadcast_id: Snowflake, viewer_id: Snowflake) -> Self {
        Self {
            broadcast_id,
            viewer_id,
            joined_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Store for broadcast and viewer sessions
#[derive(Clone)]
pub struct BroadcastSessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl BroadcastSessionStore {
    /// Create a new session store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: SESSION_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for a broadcaster's session
    fn broadcast_key(user_id: Snowflake) -> String {
        format!("{BROADCAST_SESSION_PREFIX}{user_id}")
    }

    /// Generate Redis key for a viewer's session
    fn viewer_key(viewer_id: Snowflake) -> String {
        format!("{VIEWER_SESSION_PREFIX}{viewer_id}")
    }

    /// Store a broadcast session
    pub async fn set_broadcast(&self, data: &BroadcastSessionData) -> RedisResult<()> {
        let key = Self::broadcast_key(data.user_id);
        self.pool.set(&key, data, Some(self.ttl_seconds)).await?;

        tracing::debug!(
            user_id = %data.user_id,
            broadcast_id = %data.broadcast_id,
            state = %data.state,
            "Stored broadcast session"
        );

        Ok(())
    }

    /// Get a broadcaster's session
    pub async fn get_broadcast(&self, user_id: Snowflake) -> RedisResult<Option<BroadcastSessionData>> {
        let key = Self::broadcast_key(user_id);
        self.pool.get_value(&key).await
    }

    /// Remove a broadcaster's session; returns whether one existed
    pub async fn clear_broadcast(&self, user_id: Snowflake) -> RedisResult<bool> {
        let key = Self::broadcast_key(user_id);
        self.pool.delete(&key).await
    }

    /// Refresh a broadcast session's TTL (heartbeat)
    pub async fn touch_broadcast(&self, user_id: Snowflake) -> RedisResult<bool> {
        let key = Self::broadcast_key(user_id);
        self.pool.expire(&key, self.ttl_seconds).await
    }

    /// Store a viewer session
    pub async fn set_viewer(&self, data: &ViewerSessionData) -> RedisResult<()> {
        let key = Self::viewer_key(data.viewer_id);
        self.pool.set(&key, data, Some(self.ttl_seconds)).await?;

        tracing::debug!(
            viewer_id = %data.viewer_id,
            broadcast_id = %data.broadcast_id,
            "Stored viewer session"
        );

        Ok(())
    }

    /// Get a viewer's session
    pub async fn get_viewer(&self, viewer_id: Snowflake) -> RedisResult<Option<ViewerSessionData>> {
        let key = Self::viewer_key(viewer_id);
        self.pool.get_value(&key).await
    }

    /// Remove a viewer's session; returns whether one existed
    pub async fn clear_viewer(&self, viewer_id: Snowflake) -> RedisResult<bool> {
        let key = Self::viewer_key(viewer_id);
        self.pool.delete(&key).await
    }
}

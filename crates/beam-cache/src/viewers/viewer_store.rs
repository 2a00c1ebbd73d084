//! Viewer membership storage in Redis.
//!
//! Tracks which viewers are watching each broadcast using Redis sets, so
//! counts stay correct across server instances.

use crate::pool::{RedisPool, RedisResult};
use beam_core::Snowflake;
use redis::AsyncCommands;

/// Key prefix for per-broadcast viewer sets
const VIEWERS_PREFIX: &str = "viewers:";

/// Store for per-broadcast viewer sets
#[derive(Clone)]
pub struct ViewerStore {
    pool: RedisPool,
}

impl ViewerStore {
    /// Create a new viewer store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Generate Redis key for a broadcast's viewer set
    fn viewers_key(broadcast_id: Snowflake) -> String {
        format!("{VIEWERS_PREFIX}{broadcast_id}")
    }

    /// Add a viewer to a broadcast; returns the new viewer count
    pub async fn add_viewer(
        &self,
        broadcast_id: Snowflake,
        viewer_id: Snowflake,
    ) -> RedisResult<u64> {
        let key = Self::viewers_key(broadcast_id);
        let mut conn = self.pool.get().await?;
        conn.sadd::<_, _, ()>(&key, viewer_id.to_string()).await?;
        let count: u64 = conn.scard(&key).await?;

        tracing::debug!(
            broadcast_id = %broadcast_id,
            viewer_id = %viewer_id,
            viewer_count = count,
            "Viewer joined"
        );

        Ok(count)
    }

    /// Remove a viewer from a broadcast; returns the new viewer count
    pub async fn remove_viewer(
        &self,
        broadcast_id: Snowflake,
        viewer_id: Snowflake,
    ) -> RedisResult<u64> {
        let key = Self::viewers_key(broadcast_id);
        let mut conn = self.pool.get().await?;
        conn.srem::<_, _, ()>(&key, viewer_id.to_string()).await?;
        let count: u64 = conn.scard(&key).await?;

        tracing::debug!(
            broadcast_id = %broadcast_id,
            viewer_id = %viewer_id,
            viewer_count = count,
            "Viewer left"
        );

        Ok(count)
    }

    /// Check whether a viewer is watching a broadcast
    pub async fn is_watching(
        &self,
        broadcast_id: Snowflake,
        viewer_id: Snowflake,
    ) -> RedisResult<bool> {
        let key = Self::viewers_key(broadcast_id);
        let mut conn = self.pool.get().await?;
        let member: bool = conn.sismember(&key, viewer_id.to_string()).await?;
        Ok(member)
    }

    /// Get the number of viewers watching a broadcast
    pub async fn viewer_count(&self, broadcast_id: Snowflake) -> RedisResult<u64> {
        let key = Self::viewers_key(broadcast_id);
        let mut conn = self.pool.get().await?;
        let count: u64 = conn.scard(&key).await?;
        Ok(count)
    }

    /// Get all viewers of a broadcast
    pub async fn viewers(&self, broadcast_id: Snowflake) -> RedisResult<Vec<Snowflake>> {
        let key = Self::viewers_key(broadcast_id);
        let mut conn = self.pool.get().await?;
        let ids: Vec<String> = conn.smembers(&key).await?;

        let mut result = Vec::new();
        for id_str in ids {
            if let Ok(id) = id_str.parse::<i64>() {
                result.push(Snowflake::from(id));
            }
        }
        Ok(result)
    }

    /// Drop the whole viewer set when a broadcast ends
    pub async fn clear(&self, broadcast_id: Snowflake) -> RedisResult<bool> {
        let key = Self::viewers_key(broadcast_id);
        self.pool.delete(&key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        let broadcast_id = Snowflake::from(98765i64);
        assert_eq!(
            ViewerStore::viewers_key(broadcast_id),
            format!("viewers:{broadcast_id}")
        );
    }
}

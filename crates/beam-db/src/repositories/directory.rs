//! PostgreSQL implementation of BroadcastDirectory
//!
//! The live_streams table holds only currently-live broadcasts; ending a
//! broadcast deletes its row.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use beam_core::entities::LiveStream;
use beam_core::error::DomainError;
use beam_core::traits::{BroadcastDirectory, RepoResult};
use beam_core::value_objects::Snowflake;

use crate::mappers::LiveStreamInsert;
use crate::models::LiveStreamModel;

use super::error::{map_db_error, map_unique_violation, stream_not_found};

/// PostgreSQL implementation of BroadcastDirectory
#[derive(Clone)]
pub struct PgBroadcastDirectory {
    pool: PgPool,
}

impl PgBroadcastDirectory {
    /// Create a new PgBroadcastDirectory
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BroadcastDirectory for PgBroadcastDirectory {
    #[instrument(skip(self))]
    async fn list_live(&self) -> RepoResult<Vec<LiveStream>> {
        let results = sqlx::query_as::<_, LiveStreamModel>(
            r"
            SELECT id, user_id, title, thumbnail_url, user_name, user_profile_url, tags, started_at
            FROM live_streams
            ORDER BY started_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(LiveStream::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<LiveStream>> {
        let result = sqlx::query_as::<_, LiveStreamModel>(
            r"
            SELECT id, user_id, title, thumbnail_url, user_name, user_profile_url, tags, started_at
            FROM live_streams
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(LiveStream::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<LiveStream>> {
        let result = sqlx::query_as::<_, LiveStreamModel>(
            r"
            SELECT id, user_id, title, thumbnail_url, user_name, user_profile_url, tags, started_at
            FROM live_streams
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(LiveStream::from))
    }

    #[instrument(skip(self, stream), fields(broadcast_id = %stream.id))]
    async fn insert(&self, stream: &LiveStream) -> RepoResult<()> {
        let insert = LiveStreamInsert::new(stream);

        sqlx::query(
            r"
            INSERT INTO live_streams (id, user_id, title, thumbnail_url, user_name, user_profile_url, tags, started_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.title)
        .bind(insert.thumbnail_url)
        .bind(insert.user_name)
        .bind(insert.user_profile_url)
        .bind(insert.tags)
        .bind(stream.started_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyBroadcasting))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM live_streams
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(stream_not_found(id));
        }

        Ok(())
    }
}

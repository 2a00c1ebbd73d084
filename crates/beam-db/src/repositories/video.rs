//! PostgreSQL implementation of VideoStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use beam_core::entities::Video;
use beam_core::traits::{RepoResult, VideoStore};
use beam_core::value_objects::Snowflake;

use crate::mappers::VideoInsert;
use crate::models::VideoModel;

use super::error::{map_db_error, video_not_found};

/// PostgreSQL implementation of VideoStore
#[derive(Clone)]
pub struct PgVideoStore {
    pool: PgPool,
}

impl PgVideoStore {
    /// Create a new PgVideoStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    #[instrument(skip(self, video), fields(video_id = %video.id))]
    async fn insert(&self, video: &Video) -> RepoResult<()> {
        let insert = VideoInsert::new(video);

        sqlx::query(
            r"
            INSERT INTO videos (id, user_id, title, thumbnail_url, url, display_time, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.title)
        .bind(insert.thumbnail_url)
        .bind(insert.url)
        .bind(insert.display_time)
        .bind(video.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Video>> {
        let result = sqlx::query_as::<_, VideoModel>(
            r"
            SELECT id, user_id, title, thumbnail_url, url, display_time, created_at, deleted_at
            FROM videos
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Video::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Video>> {
        let results = sqlx::query_as::<_, VideoModel>(
            r"
            SELECT id, user_id, title, thumbnail_url, url, display_time, created_at, deleted_at
            FROM videos
            WHERE user_id = $1 AND deleted_at IS NULL
            ORDER BY id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Video::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE videos
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(video_not_found(id));
        }

        Ok(())
    }
}

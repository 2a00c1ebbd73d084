//! Video service
//!
//! Implements the `VideoRepository` contract: synchronous thumbnail
//! derivation and the asynchronous upload pipeline.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{info, instrument, warn};

use beam_core::entities::Video;
use beam_core::events::VideoPublishedEvent;
use beam_core::traits::{OutcomeStream, RepoResult, Thumbnail, VideoRepository};
use beam_core::value_objects::{MediaUri, Snowflake};
use beam_core::{DomainError, DomainEvent};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Maximum video title length
pub const MAX_VIDEO_TITLE_LEN: usize = 120;

/// Video container formats accepted for upload
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "webm", "m4v"];

/// Video service, bound to the authenticated user
pub struct VideoService {
    ctx: ServiceContext,
    principal: Snowflake,
}

impl VideoService {
    /// Create a new VideoService for the given user
    pub fn new(ctx: &ServiceContext, principal: Snowflake) -> Self {
        Self {
            ctx: ctx.clone(),
            principal,
        }
    }

    /// List the authenticated user's videos, newest first
    #[instrument(skip(self), fields(user_id = %self.principal))]
    pub async fn list_own(&self) -> ServiceResult<Vec<Video>> {
        Ok(self.ctx.video_store().find_by_user(self.principal).await?)
    }

    /// Fetch a single video
    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<Video> {
        self.ctx
            .video_store()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Video", id.to_string()))
    }
}

/// Validate and normalize a video title
fn validate_video_title(title: &str) -> RepoResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::InvalidTitle("title must not be empty".to_string()));
    }
    if title.chars().count() > MAX_VIDEO_TITLE_LEN {
        return Err(DomainError::InvalidTitle(format!(
            "title must be at most {MAX_VIDEO_TITLE_LEN} characters"
        )));
    }
    Ok(title.to_string())
}

/// Require a known video container extension
fn require_video_extension(uri: &MediaUri) -> RepoResult<&str> {
    let ext = uri.extension().ok_or_else(|| {
        DomainError::ValidationError("media uri has no file extension".to_string())
    })?;

    if !VIDEO_EXTENSIONS.iter().any(|v| v.eq_ignore_ascii_case(ext)) {
        return Err(DomainError::ValidationError(format!(
            "unsupported video format: {ext}"
        )));
    }

    Ok(ext)
}

#[async_trait]
impl VideoRepository for VideoService {
    #[instrument(skip(self))]
    fn create_thumbnail(&self, video_uri: &MediaUri) -> RepoResult<Thumbnail> {
        require_video_extension(video_uri)?;

        let stem = video_uri.file_stem().ok_or_else(|| {
            DomainError::ValidationError("media uri has no file name".to_string())
        })?;

        let url = format!(
            "{}/{}/{stem}.jpg",
            self.ctx.ingest().playback_url,
            self.ctx.storage().thumbnail_prefix
        );

        Ok(Thumbnail::new(url))
    }

    #[instrument(skip(self, thumbnail), fields(user_id = %self.principal))]
    async fn add_video(
        &self,
        video_uri: &MediaUri,
        thumbnail: &Thumbnail,
        title: &str,
    ) -> OutcomeStream<bool> {
        let (tx, rx) = mpsc::channel(2);

        let prepared = validate_video_title(title).and_then(|title| {
            require_video_extension(video_uri).map(|ext| (title, ext.to_lowercase()))
        });

        let ctx = self.ctx.clone();
        let principal = self.principal;
        let thumbnail_url = thumbnail.url.clone();

        tokio::spawn(async move {
            let (title, ext) = match prepared {
                Ok(prepared) => prepared,
                Err(e) => {
                    let _ = tx.send(Err(e)).await;
                    return;
                }
            };

            let id = ctx.generate_id();
            let url = format!("{}/videos/{id}.{ext}", ctx.ingest().playback_url);
            let video = Video::new(id, principal, title, thumbnail_url, url);

            if let Err(e) = ctx.video_store().insert(&video).await {
                let _ = tx.send(Err(e)).await;
                return;
            }

            let event = DomainEvent::VideoPublished(VideoPublishedEvent {
                video_id: id,
                user_id: principal,
                title: video.title.clone(),
                at: video.created_at,
            });
            if let Err(e) = ctx.publisher().publish_to_user(principal, &event).await {
                warn!(error = %e, video_id = %id, "Failed to announce video publish");
            }

            info!(video_id = %id, user_id = %principal, "Video published");
            let _ = tx.send(Ok(true)).await;
        });

        Box::pin(ReceiverStream::new(rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{test_context, test_context_with_videos, MemoryVideos};
    use futures::StreamExt;
    use std::sync::Arc;

    #[test]
    fn test_validate_video_title() {
        assert_eq!(validate_video_title(" Unboxing ").unwrap(), "Unboxing");
        assert!(validate_video_title("").is_err());
        assert!(validate_video_title(&"y".repeat(MAX_VIDEO_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn test_require_video_extension() {
        let mp4 = MediaUri::parse("file:///clips/run.mp4").unwrap();
        assert_eq!(require_video_extension(&mp4).unwrap(), "mp4");

        let upper = MediaUri::parse("file:///clips/run.MP4").unwrap();
        assert!(require_video_extension(&upper).is_ok());

        let gif = MediaUri::parse("file:///clips/run.gif").unwrap();
        assert!(require_video_extension(&gif).is_err());

        let bare = MediaUri::parse("file:///clips/raw").unwrap();
        assert!(require_video_extension(&bare).is_err());
    }

    #[tokio::test]
    async fn test_create_thumbnail_derives_url() {
        let ctx = test_context().await;
        let service = VideoService::new(&ctx, Snowflake::new(1));

        let uri = MediaUri::parse("file:///clips/morning-run.mp4").unwrap();
        let thumb = service.create_thumbnail(&uri).unwrap();
        assert!(thumb.url.ends_with("/thumbnails/morning-run.jpg"));
    }

    #[tokio::test]
    async fn test_create_thumbnail_rejects_non_video() {
        let ctx = test_context().await;
        let service = VideoService::new(&ctx, Snowflake::new(1));

        let uri = MediaUri::parse("file:///clips/cover.png").unwrap();
        assert!(service.create_thumbnail(&uri).is_err());
    }

    #[tokio::test]
    async fn test_add_video_rejects_empty_title() {
        let ctx = test_context().await;
        let service = VideoService::new(&ctx, Snowflake::new(1));

        let uri = MediaUri::parse("file:///clips/run.mp4").unwrap();
        let thumb = Thumbnail::new("thumb");
        let mut stream = service.add_video(&uri, &thumb, "  ").await;

        let first = stream.next().await.unwrap();
        assert!(matches!(first, Err(DomainError::InvalidTitle(_))));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_add_video_persists_and_reports_success() {
        let videos = Arc::new(MemoryVideos::default());
        let ctx = test_context_with_videos(videos.clone()).await;
        let user = Snowflake::new(9);
        let service = VideoService::new(&ctx, user);

        let uri = MediaUri::parse("https://cdn.example.com/up/run.mp4").unwrap();
        let thumb = service.create_thumbnail(&uri).unwrap();
        let mut stream = service.add_video(&uri, &thumb, "Morning run").await;

        assert!(stream.next().await.unwrap().unwrap());
        assert!(stream.next().await.is_none());

        let stored = videos.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].user_id, user);
        assert_eq!(stored[0].title, "Morning run");
        assert_eq!(stored[0].thumbnail_url, thumb.url);
        assert!(stored[0].url.ends_with(".mp4"));
    }
}

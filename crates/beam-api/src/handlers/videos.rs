//! Video handlers
//!
//! Thumbnail creation is synchronous; the upload pipeline is driven to its
//! terminal outcome before responding.

use axum::{extract::State, Json};
use futures::StreamExt;
use beam_core::traits::{Thumbnail, VideoRepository};
use beam_core::value_objects::MediaUri;
use beam_core::DomainError;
use beam_service::{
    AddVideoRequest, ApiResponse, CreateThumbnailRequest, ThumbnailResponse, VideoResponse,
    VideoService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a thumbnail for a video source
///
/// POST /videos/thumbnail
pub async fn create_thumbnail(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateThumbnailRequest>,
) -> ApiResult<Json<ThumbnailResponse>> {
    let uri = MediaUri::parse(&request.video_uri).map_err(DomainError::from)?;

    let service = VideoService::new(state.service_context(), auth.user_id);
    let thumbnail = service.create_thumbnail(&uri)?;

    Ok(Json(ThumbnailResponse::from(&thumbnail)))
}

/// Upload a video
///
/// POST /videos
pub async fn add_video(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AddVideoRequest>,
) -> ApiResult<Created<Json<ApiResponse<bool>>>> {
    let uri = MediaUri::parse(&request.video_uri).map_err(DomainError::from)?;
    let thumbnail = Thumbnail::new(request.thumbnail_url);

    let service = VideoService::new(state.service_context(), auth.user_id);
    let mut outcomes = service.add_video(&uri, &thumbnail, &request.title).await;

    // Drive the upload pipeline to its terminal outcome
    let mut published = false;
    while let Some(outcome) = outcomes.next().await {
        published = outcome?;
    }

    Ok(Created(Json(ApiResponse::new(published))))
}

/// List the authenticated user's videos
///
/// GET /videos
pub async fn list_own_videos(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<VideoResponse>>>> {
    let service = VideoService::new(state.service_context(), auth.user_id);
    let videos = service.list_own().await?;

    let payload = videos.iter().map(VideoResponse::from).collect();
    Ok(Json(ApiResponse::new(payload)))
}

//! Profile handlers

use axum::{
    extract::{Path, State},
    Json,
};
use beam_service::{ProfileResponse, ProfileService};

use crate::extractors::{AuthUser, UserIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the authenticated user's profile
///
/// GET /profiles/@me
pub async fn get_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.get_profile(auth.user_id).await?;
    Ok(Json(ProfileResponse::from(profile)))
}

/// Get a user's profile with their video list
///
/// GET /profiles/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<ProfileResponse>> {
    let user_id = path.user_id()?;

    let service = ProfileService::new(state.service_context());
    let profile = service.get_profile(user_id).await?;
    Ok(Json(ProfileResponse::from(profile)))
}

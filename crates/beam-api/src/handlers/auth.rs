//! Authentication handlers
//!
//! Endpoints for credential login and token refresh.

use axum::{extract::State, Json};
use beam_service::{
    AccountResponse, AuthResponse, LoginRequest, ProfileService, RefreshTokenRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Login with login id and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = ProfileService::new(state.service_context());
    let (account, tokens) = service
        .login_with_tokens(&request.login_id, &request.password)
        .await?;

    Ok(Json(AuthResponse::new(
        tokens.access_token,
        tokens.refresh_token,
        tokens.expires_in,
        AccountResponse::from(&account),
    )))
}

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = ProfileService::new(state.service_context());
    let (account, tokens) = service.refresh_tokens(&request.refresh_token).await?;

    Ok(Json(AuthResponse::new(
        tokens.access_token,
        tokens.refresh_token,
        tokens.expires_in,
        AccountResponse::from(&account),
    )))
}

//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, health, profiles, streams, videos};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (mounted at the root, outside /api/v1)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(stream_routes())
        .merge(video_routes())
        .merge(profile_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// Live stream routes
fn stream_routes() -> Router<AppState> {
    Router::new()
        .route("/streams", get(streams::list_streams))
        .route("/streams", post(streams::start_broadcast))
        .route("/streams/events", get(streams::stream_events))
        .route("/streams/live", delete(streams::stop_broadcast))
        .route("/streams/watch", delete(streams::stop_viewing))
        .route("/streams/:broadcast_id/watch", get(streams::watch_broadcast))
}

/// Video routes
fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/videos", get(videos::list_own_videos))
        .route("/videos", post(videos::add_video))
        .route("/videos/thumbnail", post(videos::create_thumbnail))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles/@me", get(profiles::get_own_profile))
        .route("/profiles/:user_id", get(profiles::get_profile))
}

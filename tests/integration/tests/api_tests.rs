//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (with the beam schema applied)
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, helpers::seed_account, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account().await.expect("Failed to seed account");

    let request = LoginRequest::for_account(&account);
    let response = server.post("/api/v1/auth/login", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.account.login_id, account.login_id);
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account().await.expect("Failed to seed account");

    let request = LoginRequest::wrong_password(&account);
    let response = server.post("/api/v1/auth/login", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account().await.expect("Failed to seed account");

    let login = LoginRequest::for_account(&account);
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let refresh = RefreshRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/api/v1/auth/refresh", &refresh).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(refreshed.account.id, auth.account.id);
    assert!(!refreshed.access_token.is_empty());
}

// ============================================================================
// Video Tests
// ============================================================================

async fn login_token(server: &TestServer, account: &SeededAccount) -> String {
    let request = LoginRequest::for_account(account);
    let response = server.post("/api/v1/auth/login", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    auth.access_token
}

#[tokio::test]
async fn test_thumbnail_then_upload_then_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account().await.expect("Failed to seed account");
    let token = login_token(&server, &account).await;

    // Derive a thumbnail
    let thumb_request = CreateThumbnailRequest {
        video_uri: "https://cdn.test/up/morning-run.mp4".to_string(),
    };
    let response = server
        .post_auth("/api/v1/videos/thumbnail", &token, &thumb_request)
        .await
        .unwrap();
    let thumbnail: ThumbnailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(thumbnail.url.ends_with("/morning-run.jpg"));

    // Upload the video
    let upload = AddVideoRequest::unique(&thumbnail.url);
    let response = server.post_auth("/api/v1/videos", &token, &upload).await.unwrap();
    let created: DataValue<bool> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(created.data);

    // The profile now lists it
    let response = server.get_auth("/api/v1/profiles/@me", &token).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(profile.videos.iter().any(|v| v.title == upload.title));

    // Every video in the list keeps its display time text
    for video in &profile.videos {
        assert!(!video.time.is_empty());
    }
}

#[tokio::test]
async fn test_thumbnail_rejects_non_video() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account().await.expect("Failed to seed account");
    let token = login_token(&server, &account).await;

    let request = CreateThumbnailRequest {
        video_uri: "https://cdn.test/up/cover.png".to_string(),
    };
    let response = server
        .post_auth("/api/v1/videos/thumbnail", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_videos_require_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/videos").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Live Stream Tests
// ============================================================================

#[tokio::test]
async fn test_broadcast_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account().await.expect("Failed to seed account");
    let token = login_token(&server, &account).await;

    // Start broadcasting; the response is an SSE stream whose first event
    // carries the broadcaster session
    let request = StartBroadcastRequest::unique();
    let mut response = server
        .post_auth("/api/v1/streams", &token, &request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let first_chunk = response.chunk().await.unwrap().expect("No SSE payload");
    let payload = String::from_utf8_lossy(&first_chunk).to_string();
    assert!(payload.contains("session"), "payload: {payload}");
    assert!(payload.contains("stream_key"), "payload: {payload}");
    assert!(payload.contains("ingest_url"), "payload: {payload}");

    // The broadcast appears in the directory
    let listing = server.get("/api/v1/streams").await.unwrap();
    let streams: DataList<LiveStreamEntry> = assert_json(listing, StatusCode::OK).await.unwrap();
    let entry = streams
        .data
        .iter()
        .find(|s| s.user_id == account.id)
        .expect("Broadcast not listed");
    assert_eq!(entry.title, request.title);
    assert_eq!(entry.tags, request.tags);

    // Stop broadcasting (fire-and-forget, always 204)
    let response = server.delete_auth("/api/v1/streams/live", &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Directory no longer lists it
    let listing = server.get("/api/v1/streams").await.unwrap();
    let streams: DataList<LiveStreamEntry> = assert_json(listing, StatusCode::OK).await.unwrap();
    assert!(!streams.data.iter().any(|s| s.user_id == account.id));
}

#[tokio::test]
async fn test_watch_unknown_broadcast() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account().await.expect("Failed to seed account");
    let token = login_token(&server, &account).await;

    let mut response = server
        .get_auth("/api/v1/streams/424242/watch", &token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The outcome stream reports the failure as its only element
    let first_chunk = response.chunk().await.unwrap().expect("No SSE payload");
    let payload = String::from_utf8_lossy(&first_chunk).to_string();
    assert!(payload.contains("UNKNOWN_BROADCAST"), "payload: {payload}");
}

#[tokio::test]
async fn test_stop_without_broadcast_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account().await.expect("Failed to seed account");
    let token = login_token(&server, &account).await;

    let response = server.delete_auth("/api/v1/streams/live", &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth("/api/v1/streams/watch", &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

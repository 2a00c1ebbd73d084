//! Live stream handlers
//!
//! The directory snapshot is a plain JSON endpoint; the directory feed and
//! the broadcast/watch sessions are SSE endpoints carrying the service
//! layer's outcome streams. Closing the SSE connection drops the stream,
//! which cancels the producing session.

use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::{Stream, StreamExt};
use beam_core::traits::LiveStreamRepository;
use beam_core::DomainError;
use beam_service::{
    ApiResponse, LiveStreamResponse, LiveStreamService, StartBroadcastRequest, StreamSession,
};

use crate::extractors::{AuthUser, BroadcastIdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Serialize one outcome as an SSE event
fn outcome_event(name: &str, payload: serde_json::Value) -> Event {
    Event::default()
        .event(name)
        .json_data(payload)
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to serialize SSE payload");
            Event::default().event("error").data("serialization failed")
        })
}

/// Failure outcome as an SSE event
fn error_event(err: &DomainError) -> Event {
    outcome_event(
        "error",
        serde_json::json!({
            "code": err.code(),
            "message": err.to_string(),
        }),
    )
}

/// Session outcome as an SSE event
fn session_event(outcome: Result<StreamSession, DomainError>) -> Result<Event, Infallible> {
    Ok(match outcome {
        Ok(session) => outcome_event("session", serde_json::Value::from(&session)),
        Err(e) => error_event(&e),
    })
}

/// Get the current live directory
///
/// GET /streams
pub async fn list_streams(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<LiveStreamResponse>>>> {
    let streams = state.service_context().directory().list_live().await?;

    let payload = streams.iter().map(LiveStreamResponse::from).collect();
    Ok(Json(ApiResponse::new(payload)))
}

/// Live-updating directory feed
///
/// GET /streams/events
pub async fn stream_events(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let service = LiveStreamService::new(state.service_context(), auth.user_id);
    let outcomes = service.live_streams().await;

    let events = outcomes.map(|outcome| {
        Ok(match outcome {
            Ok(streams) => {
                let payload: Vec<LiveStreamResponse> =
                    streams.iter().map(LiveStreamResponse::from).collect();
                outcome_event("directory", serde_json::json!(payload))
            }
            Err(e) => error_event(&e),
        })
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Start broadcasting
///
/// POST /streams
pub async fn start_broadcast(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<StartBroadcastRequest>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let service = LiveStreamService::new(state.service_context(), auth.user_id);
    let outcomes = service.start_with_tags(&request.title, request.tags).await;

    Sse::new(outcomes.map(session_event)).keep_alive(KeepAlive::default())
}

/// Stop broadcasting
///
/// DELETE /streams/live
pub async fn stop_broadcast(State(state): State<AppState>, auth: AuthUser) -> NoContent {
    let service = LiveStreamService::new(state.service_context(), auth.user_id);
    // Fire-and-forget: always 204
    service.stop_broadcast().await;
    NoContent
}

/// Watch a broadcast
///
/// GET /streams/{broadcast_id}/watch
pub async fn watch_broadcast(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<BroadcastIdPath>,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let broadcast_id = path.broadcast_id()?;

    let service = LiveStreamService::new(state.service_context(), auth.user_id);
    let outcomes = service.watch_broadcast(broadcast_id).await;

    Ok(Sse::new(outcomes.map(session_event)).keep_alive(KeepAlive::default()))
}

/// Stop viewing
///
/// DELETE /streams/watch
pub async fn stop_viewing(State(state): State<AppState>, auth: AuthUser) -> NoContent {
    let service = LiveStreamService::new(state.service_context(), auth.user_id);
    // Fire-and-forget: always 204
    service.stop_viewing().await;
    NoContent
}

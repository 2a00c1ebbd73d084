//! Live streaming service
//!
//! Implements the `LiveStreamRepository` contract: the live-updating
//! directory stream and the broadcast/watch session lifecycle.
//!
//! Every session operation yields its outcomes over an mpsc-backed stream.
//! Dropping the stream cancels the producer task at its next send or
//! `closed()` wait; the stop operations additionally tear down server-side
//! state and abort the producer through the session registry.

use async_trait::async_trait;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{info, instrument, warn};

use beam_cache::{BroadcastSessionData, PubSubChannel, RedisPoolError, ViewerSessionData};
use beam_core::entities::LiveStream;
use beam_core::events::{
    BroadcastEndedEvent, BroadcastStartedEvent, ViewerJoinedEvent, ViewerLeftEvent,
};
use beam_core::traits::{LiveStreamRepository, OutcomeStream, RepoResult};
use beam_core::value_objects::{Snowflake, StreamKey};
use beam_core::{DomainError, DomainEvent};

use super::context::ServiceContext;

/// Maximum broadcast title length
pub const MAX_TITLE_LEN: usize = 100;

/// Session handle yielded by broadcast and watch operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSession {
    pub broadcast_id: Snowflake,
    pub kind: StreamSessionKind,
}

/// What side of the broadcast this session is on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamSessionKind {
    /// Broadcaster side: push media to `ingest_url` authorized by the key
    Broadcaster {
        stream_key: StreamKey,
        ingest_url: String,
    },
    /// Viewer side: pull media from `playback_url`
    Viewer { playback_url: String },
}

impl StreamSession {
    /// Whether this is a broadcaster session
    pub fn is_broadcaster(&self) -> bool {
        matches!(self.kind, StreamSessionKind::Broadcaster { .. })
    }
}

/// Live streaming service, bound to the authenticated user
pub struct LiveStreamService {
    ctx: ServiceContext,
    principal: Snowflake,
}

impl LiveStreamService {
    /// Create a new LiveStreamService for the given user
    pub fn new(ctx: &ServiceContext, principal: Snowflake) -> Self {
        Self {
            ctx: ctx.clone(),
            principal,
        }
    }

    /// Begin broadcasting with directory tags. The contract operation
    /// delegates here with an empty tag list.
    pub async fn start_with_tags(
        &self,
        title: &str,
        tags: Vec<String>,
    ) -> OutcomeStream<StreamSession> {
        let title = match validate_title(title) {
            Ok(title) => title,
            Err(e) => return failed(e),
        };
        let tags = match normalize_tags(tags) {
            Ok(tags) => tags,
            Err(e) => return failed(e),
        };

        if self.ctx.registry().is_broadcasting(self.principal) {
            return failed(DomainError::AlreadyBroadcasting);
        }

        let ctx = self.ctx.clone();
        let principal = self.principal;
        let (tx, rx) = mpsc::channel(4);

        let task = tokio::spawn(async move {
            match establish_broadcast(&ctx, principal, &title, tags).await {
                Ok(session) => {
                    if tx.send(Ok(session)).await.is_err() {
                        // Stream dropped before the handle was delivered
                        teardown_broadcast(&ctx, principal).await;
                        ctx.registry().forget_broadcast(principal);
                        return;
                    }

                    // Hold the stream open for the broadcast's lifetime
                    tx.closed().await;
                    teardown_broadcast(&ctx, principal).await;
                    ctx.registry().forget_broadcast(principal);
                }
                Err(e) => {
                    let _ = tx.send(Err(e)).await;
                    ctx.registry().forget_broadcast(principal);
                }
            }
        });

        self.ctx
            .registry()
            .register_broadcast(self.principal, task.abort_handle());

        Box::pin(ReceiverStream::new(rx))
    }
}

fn map_cache_error(e: RedisPoolError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

/// Validate and normalize a broadcast title
fn validate_title(title: &str) -> RepoResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::InvalidTitle("title must not be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::InvalidTitle(format!(
            "title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(title.to_string())
}

/// Trim tags, drop empties, and enforce the tag limit
fn normalize_tags(tags: Vec<String>) -> RepoResult<Vec<String>> {
    let tags: Vec<String> = tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if tags.len() > beam_core::MAX_STREAM_TAGS {
        return Err(DomainError::TooManyTags {
            max: beam_core::MAX_STREAM_TAGS,
        });
    }
    Ok(tags)
}

/// One-shot failure stream
fn failed<T: Send + 'static>(err: DomainError) -> OutcomeStream<T> {
    Box::pin(futures::stream::once(async move { Err(err) }))
}

/// Create the directory row, session entry, and announcement for a new
/// broadcast, returning the broadcaster session handle
async fn establish_broadcast(
    ctx: &ServiceContext,
    user_id: Snowflake,
    title: &str,
    tags: Vec<String>,
) -> RepoResult<StreamSession> {
    if ctx.directory().find_by_user(user_id).await?.is_some() {
        return Err(DomainError::AlreadyBroadcasting);
    }

    let account = ctx
        .account_store()
        .find_by_id(user_id)
        .await?
        .ok_or(DomainError::AccountNotFound(user_id))?;

    let broadcast_id = ctx.generate_id();
    let stream_key = StreamKey::generate();
    let playback_base = &ctx.ingest().playback_url;

    let stream = LiveStream::new(
        broadcast_id,
        user_id,
        title.to_string(),
        account.display_name().to_string(),
        account.picture_url.clone(),
    )
    .with_thumbnail(format!(
        "{playback_base}/{}/{broadcast_id}.jpg",
        ctx.storage().thumbnail_prefix
    ))
    .with_tags(tags);

    ctx.directory().insert(&stream).await?;

    let session =
        BroadcastSessionData::new(broadcast_id, user_id, stream_key.as_str().to_string()).live();
    ctx.session_store()
        .set_broadcast(&session)
        .await
        .map_err(map_cache_error)?;

    let event = DomainEvent::BroadcastStarted(BroadcastStartedEvent {
        broadcast_id,
        user_id,
        title: title.to_string(),
        at: stream.started_at,
    });
    if let Err(e) = ctx.publisher().publish_domain_event(Some(broadcast_id), &event).await {
        warn!(error = %e, broadcast_id = %broadcast_id, "Failed to announce broadcast start");
    }

    info!(broadcast_id = %broadcast_id, user_id = %user_id, "Broadcast started");

    let ingest_url = format!("{}/{}", ctx.ingest().ingest_url, stream_key.as_str());
    Ok(StreamSession {
        broadcast_id,
        kind: StreamSessionKind::Broadcaster {
            stream_key,
            ingest_url,
        },
    })
}

/// Remove all server-side state for a user's broadcast. Idempotent; every
/// failure is logged and swallowed.
async fn teardown_broadcast(ctx: &ServiceContext, user_id: Snowflake) {
    let broadcast_id = match ctx.session_store().get_broadcast(user_id).await {
        Ok(Some(session)) => Some(session.broadcast_id),
        Ok(None) => match ctx.directory().find_by_user(user_id).await {
            Ok(stream) => stream.map(|s| s.id),
            Err(e) => {
                warn!(error = %e, user_id = %user_id, "Directory lookup failed during teardown");
                None
            }
        },
        Err(e) => {
            warn!(error = %e, user_id = %user_id, "Session lookup failed during teardown");
            None
        }
    };

    let Some(broadcast_id) = broadcast_id else {
        return;
    };

    if let Err(e) = ctx.directory().remove(broadcast_id).await {
        if !e.is_not_found() {
            warn!(error = %e, broadcast_id = %broadcast_id, "Failed to remove directory entry");
        }
    }

    if let Err(e) = ctx.session_store().clear_broadcast(user_id).await {
        warn!(error = %e, user_id = %user_id, "Failed to clear broadcast session");
    }

    if let Err(e) = ctx.viewer_store().clear(broadcast_id).await {
        warn!(error = %e, broadcast_id = %broadcast_id, "Failed to clear viewer set");
    }

    let event = DomainEvent::BroadcastEnded(BroadcastEndedEvent {
        broadcast_id,
        user_id,
        at: chrono::Utc::now(),
    });
    if let Err(e) = ctx.publisher().publish_domain_event(Some(broadcast_id), &event).await {
        warn!(error = %e, broadcast_id = %broadcast_id, "Failed to announce broadcast end");
    }

    info!(broadcast_id = %broadcast_id, user_id = %user_id, "Broadcast ended");
}

/// Join a broadcast as a viewer: session entry, viewer set, announcement
async fn join_broadcast(
    ctx: &ServiceContext,
    viewer_id: Snowflake,
    broadcast_id: Snowflake,
) -> RepoResult<StreamSession> {
    let stream = ctx
        .directory()
        .find_by_id(broadcast_id)
        .await?
        .ok_or(DomainError::StreamNotFound(broadcast_id))?;

    ctx.session_store()
        .set_viewer(&ViewerSessionData::new(broadcast_id, viewer_id))
        .await
        .map_err(map_cache_error)?;

    let viewer_count = ctx
        .viewer_store()
        .add_viewer(broadcast_id, viewer_id)
        .await
        .map_err(map_cache_error)?;

    let event = DomainEvent::ViewerJoined(ViewerJoinedEvent {
        broadcast_id,
        viewer_id,
        viewer_count,
        at: chrono::Utc::now(),
    });
    if let Err(e) = ctx.publisher().publish_domain_event(Some(broadcast_id), &event).await {
        warn!(error = %e, broadcast_id = %broadcast_id, "Failed to announce viewer join");
    }

    info!(broadcast_id = %broadcast_id, viewer_id = %viewer_id, "Viewer joined");

    let playback_url = format!("{}/{}/index.m3u8", ctx.ingest().playback_url, stream.id);
    Ok(StreamSession {
        broadcast_id,
        kind: StreamSessionKind::Viewer { playback_url },
    })
}

/// Remove all server-side state for a user's watch session. Idempotent;
/// every failure is logged and swallowed.
async fn leave_broadcast(ctx: &ServiceContext, viewer_id: Snowflake) {
    let session = match ctx.session_store().get_viewer(viewer_id).await {
        Ok(Some(session)) => session,
        Ok(None) => return,
        Err(e) => {
            warn!(error = %e, viewer_id = %viewer_id, "Viewer session lookup failed");
            return;
        }
    };

    let broadcast_id = session.broadcast_id;

    let viewer_count = match ctx.viewer_store().remove_viewer(broadcast_id, viewer_id).await {
        Ok(count) => count,
        Err(e) => {
            warn!(error = %e, broadcast_id = %broadcast_id, "Failed to leave viewer set");
            0
        }
    };

    if let Err(e) = ctx.session_store().clear_viewer(viewer_id).await {
        warn!(error = %e, viewer_id = %viewer_id, "Failed to clear viewer session");
    }

    let event = DomainEvent::ViewerLeft(ViewerLeftEvent {
        broadcast_id,
        viewer_id,
        viewer_count,
        at: chrono::Utc::now(),
    });
    if let Err(e) = ctx.publisher().publish_domain_event(Some(broadcast_id), &event).await {
        warn!(error = %e, broadcast_id = %broadcast_id, "Failed to announce viewer leave");
    }

    info!(broadcast_id = %broadcast_id, viewer_id = %viewer_id, "Viewer left");
}

#[async_trait]
impl LiveStreamRepository for LiveStreamService {
    type Session = StreamSession;

    #[instrument(skip(self))]
    async fn live_streams(&self) -> OutcomeStream<Vec<LiveStream>> {
        let ctx = self.ctx.clone();
        let mut events = ctx.subscriber().receiver();

        if let Err(e) = ctx.subscriber().subscribe(&[PubSubChannel::directory()]).await {
            warn!(error = %e, "Failed to subscribe to directory channel");
        }

        let (tx, rx) = mpsc::channel(16);
        tokio::spawn(async move {
            // Immediate snapshot, then a fresh list after every change
            let snapshot = ctx.directory().list_live().await;
            let is_err = snapshot.is_err();
            if tx.send(snapshot).await.is_err() || is_err {
                return;
            }

            loop {
                tokio::select! {
                    () = tx.closed() => break,
                    msg = events.recv() => match msg {
                        Ok(msg) if msg.channel == PubSubChannel::Directory => {
                            let update = ctx.directory().list_live().await;
                            let is_err = update.is_err();
                            if tx.send(update).await.is_err() || is_err {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(RecvError::Lagged(skipped)) => {
                            warn!(skipped, "Directory stream lagged behind pub/sub");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            }
        });

        Box::pin(ReceiverStream::new(rx))
    }

    #[instrument(skip(self), fields(user_id = %self.principal))]
    async fn start_broadcast(&self, title: &str) -> OutcomeStream<Self::Session> {
        self.start_with_tags(title, Vec::new()).await
    }

    #[instrument(skip(self), fields(viewer_id = %self.principal))]
    async fn watch_broadcast(&self, broadcast_id: Snowflake) -> OutcomeStream<Self::Session> {
        let ctx = self.ctx.clone();
        let principal = self.principal;
        let mut events = ctx.subscriber().receiver();

        if let Err(e) = ctx
            .subscriber()
            .subscribe(&[PubSubChannel::broadcast(broadcast_id)])
            .await
        {
            warn!(error = %e, broadcast_id = %broadcast_id, "Failed to subscribe to broadcast channel");
        }

        let (tx, rx) = mpsc::channel(4);

        let task = tokio::spawn(async move {
            let session = match join_broadcast(&ctx, principal, broadcast_id).await {
                Ok(session) => session,
                Err(e) => {
                    let _ = tx.send(Err(e)).await;
                    ctx.registry().forget_viewer(principal);
                    return;
                }
            };

            if tx.send(Ok(session)).await.is_err() {
                leave_broadcast(&ctx, principal).await;
                ctx.registry().forget_viewer(principal);
                return;
            }

            loop {
                tokio::select! {
                    () = tx.closed() => {
                        leave_broadcast(&ctx, principal).await;
                        ctx.registry().forget_viewer(principal);
                        break;
                    }
                    msg = events.recv() => match msg {
                        Ok(msg) if msg.channel == PubSubChannel::Broadcast(broadcast_id) => {
                            let ended = msg
                                .event
                                .as_ref()
                                .is_some_and(|e| e.event_type == "BROADCAST_ENDED");
                            if ended {
                                // Surface the abrupt end, then close
                                let _ = tx.send(Err(DomainError::BroadcastEnded)).await;
                                leave_broadcast(&ctx, principal).await;
                                ctx.registry().forget_viewer(principal);
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(RecvError::Lagged(skipped)) => {
                            warn!(skipped, "Watch stream lagged behind pub/sub");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            }
        });

        self.ctx
            .registry()
            .register_viewer(self.principal, task.abort_handle());

        Box::pin(ReceiverStream::new(rx))
    }

    #[instrument(skip(self), fields(user_id = %self.principal))]
    async fn stop_broadcast(&self) {
        teardown_broadcast(&self.ctx, self.principal).await;
        self.ctx.registry().end_broadcast(self.principal);
    }

    #[instrument(skip(self), fields(viewer_id = %self.principal))]
    async fn stop_viewing(&self) {
        leave_broadcast(&self.ctx, self.principal).await;
        self.ctx.registry().end_viewer(self.principal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{test_context, MemoryDirectory};
    use futures::StreamExt;
    use std::sync::Arc;

    #[test]
    fn test_normalize_tags() {
        let tags = normalize_tags(vec![
            " sport ".to_string(),
            String::new(),
            "outdoor".to_string(),
        ])
        .unwrap();
        assert_eq!(tags, vec!["sport", "outdoor"]);

        let too_many: Vec<String> = (0..11).map(|i| format!("tag{i}")).collect();
        assert!(matches!(
            normalize_tags(too_many),
            Err(DomainError::TooManyTags { .. })
        ));
    }

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title("  Morning run  ").unwrap(), "Morning run");
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[tokio::test]
    async fn test_start_broadcast_rejects_empty_title() {
        let ctx = test_context().await;
        let service = LiveStreamService::new(&ctx, Snowflake::new(1));

        let mut stream = service.start_broadcast("   ").await;
        let first = stream.next().await.unwrap();
        assert!(matches!(first, Err(DomainError::InvalidTitle(_))));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_watch_unknown_broadcast_fails() {
        let ctx = test_context().await;
        let service = LiveStreamService::new(&ctx, Snowflake::new(2));

        let mut stream = service.watch_broadcast(Snowflake::new(999)).await;
        let first = stream.next().await.unwrap();
        assert!(matches!(first, Err(DomainError::StreamNotFound(_))));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_live_streams_emits_snapshot_first() {
        let directory = Arc::new(MemoryDirectory::default());
        let stream_entry = LiveStream::new(
            Snowflake::new(10),
            Snowflake::new(20),
            "test".to_string(),
            "tester".to_string(),
            String::new(),
        );
        directory.push(stream_entry.clone());

        let ctx = crate::services::testing::test_context_with_directory(directory).await;
        let service = LiveStreamService::new(&ctx, Snowflake::new(3));

        let mut stream = service.live_streams().await;
        let snapshot = stream.next().await.unwrap().unwrap();
        assert_eq!(snapshot, vec![stream_entry]);
    }

    #[tokio::test]
    async fn test_second_start_while_registered_conflicts() {
        let ctx = test_context().await;
        let service = LiveStreamService::new(&ctx, Snowflake::new(4));

        // Simulate an already-registered producer for this user
        let handle = tokio::spawn(async {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
        });
        ctx.registry().register_broadcast(Snowflake::new(4), handle.abort_handle());

        let mut stream = service.start_broadcast("another").await;
        let first = stream.next().await.unwrap();
        assert!(matches!(first, Err(DomainError::AlreadyBroadcasting)));

        ctx.registry().end_broadcast(Snowflake::new(4));
    }

    #[tokio::test]
    async fn test_stop_without_session_is_idempotent() {
        let ctx = test_context().await;
        let service = LiveStreamService::new(&ctx, Snowflake::new(5));

        // Nothing active: both stops are no-ops
        service.stop_broadcast().await;
        service.stop_viewing().await;
        assert!(!ctx.registry().is_broadcasting(Snowflake::new(5)));
    }
}

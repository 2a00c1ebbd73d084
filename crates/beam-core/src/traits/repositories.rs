//! Repository contracts (ports) - the operations the application layer
//! exposes to clients
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Session-oriented operations do not return a
//! single value: they produce an [`OutcomeStream`], a lazy, cancellable
//! sequence of success/failure outcomes over time. Dropping the stream
//! cancels the producing work; the explicit `stop_*` operations also tear
//! down server-side session state.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::entities::LiveStream;
use crate::error::DomainError;
use crate::value_objects::{MediaUri, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// A lazy sequence of outcomes: zero or more time-ordered results, each
/// itself success-with-payload or failure
pub type OutcomeStream<T> = BoxStream<'static, RepoResult<T>>;

/// Reference to a generated video thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
}

impl Thumbnail {
    /// Wrap a thumbnail location
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

// ============================================================================
// Live Stream Repository
// ============================================================================

#[async_trait]
pub trait LiveStreamRepository: Send + Sync {
    /// Session handle yielded by the broadcast and watch operations. The
    /// payload type of session operations is a parameter of the contract,
    /// not fixed by it.
    type Session: Send + 'static;

    /// Live-updating broadcast directory: an immediate snapshot element,
    /// then a fresh list after every directory change
    async fn live_streams(&self) -> OutcomeStream<Vec<LiveStream>>;

    /// Begin broadcasting under the given title; yields the session handle
    /// once the broadcast is established and stays open for its lifetime
    async fn start_broadcast(&self, title: &str) -> OutcomeStream<Self::Session>;

    /// Join an existing broadcast as a viewer; yields a session handle, and
    /// a terminal `BroadcastEnded` failure if the broadcast ends while
    /// watching
    async fn watch_broadcast(&self, broadcast_id: Snowflake) -> OutcomeStream<Self::Session>;

    /// Terminate the broadcaster's session. Fire-and-forget: errors are
    /// logged, never returned. Idempotent when no session is active.
    async fn stop_broadcast(&self);

    /// Terminate the viewer's session. Fire-and-forget and idempotent,
    /// symmetric to `stop_broadcast`.
    async fn stop_viewing(&self);
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Authenticate with login id and password. Yields a single boolean
    /// outcome: `Ok(true)` accepted, `Ok(false)` rejected credentials,
    /// `Err(_)` infrastructure failure.
    async fn login(&self, id: &str, password: &str) -> OutcomeStream<bool>;
}

// ============================================================================
// Video Repository
// ============================================================================

#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Derive a thumbnail for the given media. Synchronous: fails fast on
    /// an unusable source, no I/O on the calling path.
    fn create_thumbnail(&self, video_uri: &MediaUri) -> RepoResult<Thumbnail>;

    /// Upload a video. Yields boolean outcomes; terminal `Ok(true)` once
    /// the video is persisted and announced.
    async fn add_video(
        &self,
        video_uri: &MediaUri,
        thumbnail: &Thumbnail,
        title: &str,
    ) -> OutcomeStream<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_wraps_url() {
        let thumb = Thumbnail::new("https://cdn.example.com/t/1.jpg");
        assert_eq!(thumb.url, "https://cdn.example.com/t/1.jpg");
    }
}

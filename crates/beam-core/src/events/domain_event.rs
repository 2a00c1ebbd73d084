//! Domain events - events emitted when broadcast or video state changes
//!
//! These events ride the cache pub/sub channels and drive the live
//! directory outcome stream.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    BroadcastStarted(BroadcastStartedEvent),
    BroadcastEnded(BroadcastEndedEvent),
    ViewerJoined(ViewerJoinedEvent),
    ViewerLeft(ViewerLeftEvent),
    VideoPublished(VideoPublishedEvent),
    AccountLoggedIn(AccountLoggedInEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::BroadcastStarted(_) => "BROADCAST_STARTED",
            Self::BroadcastEnded(_) => "BROADCAST_ENDED",
            Self::ViewerJoined(_) => "VIEWER_JOINED",
            Self::ViewerLeft(_) => "VIEWER_LEFT",
            Self::VideoPublished(_) => "VIDEO_PUBLISHED",
            Self::AccountLoggedIn(_) => "ACCOUNT_LOGGED_IN",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::BroadcastStarted(e) => e.at,
            Self::BroadcastEnded(e) => e.at,
            Self::ViewerJoined(e) => e.at,
            Self::ViewerLeft(e) => e.at,
            Self::VideoPublished(e) => e.at,
            Self::AccountLoggedIn(e) => e.at,
        }
    }

    /// Whether the event changes the live directory listing
    pub fn touches_directory(&self) -> bool {
        matches!(self, Self::BroadcastStarted(_) | Self::BroadcastEnded(_))
    }
}

/// A broadcast went live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastStartedEvent {
    pub broadcast_id: Snowflake,
    pub user_id: Snowflake,
    pub title: String,
    pub at: DateTime<Utc>,
}

/// A broadcast ended
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastEndedEvent {
    pub broadcast_id: Snowflake,
    pub user_id: Snowflake,
    pub at: DateTime<Utc>,
}

/// A viewer joined a broadcast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerJoinedEvent {
    pub broadcast_id: Snowflake,
    pub viewer_id: Snowflake,
    pub viewer_count: u64,
    pub at: DateTime<Utc>,
}

/// A viewer left a broadcast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerLeftEvent {
    pub broadcast_id: Snowflake,
    pub viewer_id: Snowflake,
    pub viewer_count: u64,
    pub at: DateTime<Utc>,
}

/// A video finished uploading and is playable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoPublishedEvent {
    pub video_id: Snowflake,
    pub user_id: Snowflake,
    pub title: String,
    pub at: DateTime<Utc>,
}

/// An account logged in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountLoggedInEvent {
    pub user_id: Snowflake,
    pub at: DateTime<Utc>,
}

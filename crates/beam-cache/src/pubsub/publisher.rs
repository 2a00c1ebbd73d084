//! Redis Pub/Sub publisher.
//!
//! Publishes domain events to Redis channels for distribution to connected
//! clients and to other server instances.

use crate::pool::{RedisPool, RedisResult};
use crate::pubsub::PubSubChannel;
use beam_core::{DomainEvent, Snowflake};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

/// Event envelope for Pub/Sub messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubSubEvent {
    /// Event type name (e.g., "BROADCAST_STARTED", "VIEWER_JOINED")
    pub event_type: String,
    /// Event payload
    pub data: serde_json::Value,
}

impl PubSubEvent {
    /// Create a new event
    #[must_use]
    pub fn new(event_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }

    /// Wrap a domain event
    pub fn from_domain(event: &DomainEvent) -> Result<Self, serde_json::Error> {
        Ok(Self {
            event_type: event.event_type().to_string(),
            data: serde_json::to_value(event)?,
        })
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct Publisher {
    pool: RedisPool,
}

impl Publisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish an event to a channel
    pub async fn publish(&self, channel: &PubSubChannel, event: &PubSubEvent) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let channel_name = channel.name();
        let payload = event.to_json()?;

        let receivers: u32 = conn.publish(&channel_name, &payload).await?;

        tracing::debug!(
            channel = %channel_name,
            event_type = %event.event_type,
            receivers = receivers,
            "Published event"
        );

        Ok(receivers)
    }

    /// Publish to multiple channels
    pub async fn publish_many(
        &self,
        channels: &[PubSubChannel],
        event: &PubSubEvent,
    ) -> RedisResult<u32> {
        let payload = event.to_json()?;
        let mut total_receivers = 0;
        let mut conn = self.pool.get().await?;

        for channel in channels {
            let channel_name = channel.name();
            let receivers: u32 = conn.publish(&channel_name, &payload).await?;
            total_receivers += receivers;
        }

        tracing::debug!(
            channels = channels.len(),
            event_type = %event.event_type,
            total_receivers = total_receivers,
            "Published event to multiple channels"
        );

        Ok(total_receivers)
    }
}

/// Convenience methods for domain events
impl Publisher {
    /// Publish a domain event to the channels it belongs on: the directory
    /// channel for directory changes, plus the broadcast channel when the
    /// event concerns a specific broadcast.
    pub async fn publish_domain_event(
        &self,
        broadcast_id: Option<Snowflake>,
        event: &DomainEvent,
    ) -> RedisResult<u32> {
        let envelope = PubSubEvent::from_domain(event)?;

        let mut channels = Vec::new();
        if event.touches_directory() {
            channels.push(PubSubChannel::directory());
        }
        if let Some(id) = broadcast_id {
            channels.push(PubSubChannel::broadcast(id));
        }

        if channels.is_empty() {
            return Ok(0);
        }

        self.publish_many(&channels, &envelope).await
    }

    /// Publish a user-specific event
    pub async fn publish_to_user(
        &self,
        user_id: Snowflake,
        event: &DomainEvent,
    ) -> RedisResult<u32> {
        let envelope = PubSubEvent::from_domain(event)?;
        let channel = PubSubChannel::user(user_id);
        self.publish(&channel, &envelope).await
    }
}

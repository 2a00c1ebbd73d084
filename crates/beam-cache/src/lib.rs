//! # beam-cache
//!
//! Redis caching layer for broadcast sessions, viewer sets, and pub/sub.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Broadcast and viewer session management
//! - **Viewer Sets**: Per-broadcast viewer membership and counts
//! - **Pub/Sub**: Real-time event distribution across server instances
//!
//! ## Example
//!
//! ```ignore
//! use beam_cache::{PubSubChannel, Publisher, RedisPool, RedisPoolConfig, ViewerStore};
//!
//! // Create Redis pool
//! let config = RedisPoolConfig::default();
//! let pool = RedisPool::new(config)?;
//!
//! // Create stores
//! let viewers = ViewerStore::new(pool.clone());
//! let publisher = Publisher::new(pool.clone());
//!
//! // Track a viewer
//! let count = viewers.add_viewer(broadcast_id, viewer_id).await?;
//!
//! // Publish the event
//! publisher.publish_domain_event(Some(broadcast_id), &event).await?;
//! ```

pub mod pool;
pub mod pubsub;
pub mod session;
pub mod viewers;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export session types
pub use session::{BroadcastSessionData, BroadcastSessionStore, BroadcastState, ViewerSessionData};

// Re-export viewer types
pub use viewers::ViewerStore;

// Re-export pubsub types
pub use pubsub::{
    PubSubChannel, PubSubEvent, Publisher, ReceivedMessage, Subscriber, SubscriberBuilder,
    SubscriberConfig, SubscriberError, SubscriberResult, BROADCAST_CHANNEL_PREFIX,
    DIRECTORY_CHANNEL, USER_CHANNEL_PREFIX,
};

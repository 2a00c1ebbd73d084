//! Pub/Sub channel definitions.
//!
//! Defines the channel naming conventions for Redis Pub/Sub.

use beam_core::Snowflake;

/// Channel prefix for per-broadcast events
pub const BROADCAST_CHANNEL_PREFIX: &str = "broadcast:";
/// Channel prefix for user-specific events
pub const USER_CHANNEL_PREFIX: &str = "user:";
/// Channel carrying live directory changes
pub const DIRECTORY_CHANNEL: &str = "directory";

/// Pub/Sub channel types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PubSubChannel {
    /// Events for a specific broadcast (its viewers)
    Broadcast(Snowflake),
    /// Events for a specific user (all their sessions)
    User(Snowflake),
    /// Live directory changes (all connected clients)
    Directory,
    /// Custom channel name
    Custom(String),
}

impl PubSubChannel {
    /// Create a broadcast channel
    #[must_use]
    pub fn broadcast(broadcast_id: Snowflake) -> Self {
        Self::Broadcast(broadcast_id)
    }

    /// Create a user channel
    #[must_use]
    pub fn user(user_id: Snowflake) -> Self {
        Self::User(user_id)
    }

    /// Create the directory channel
    #[must_use]
    pub fn directory() -> Self {
        Self::Directory
    }

    /// Create a custom channel
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Get the Redis channel name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Broadcast(id) => format!("{BROADCAST_CHANNEL_PREFIX}{id}"),
            Self::User(id) => format!("{USER_CHANNEL_PREFIX}{id}"),
            Self::Directory => DIRECTORY_CHANNEL.to_string(),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Parse a channel name back to a `PubSubChannel`
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == DIRECTORY_CHANNEL {
            return Self::Directory;
        }

        if let Some(id_str) = name.strip_prefix(BROADCAST_CHANNEL_PREFIX) {
            if let Ok(id) = id_str.parse::<i64>() {
                return Self::Broadcast(Snowflake::from(id));
            }
        }

        if let Some(id_str) = name.strip_prefix(USER_CHANNEL_PREFIX) {
            if let Ok(id) = id_str.parse::<i64>() {
                return Self::User(Snowflake::from(id));
            }
        }

        Self::Custom(name.to_string())
    }
}

impl std::fmt::Display for PubSubChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

//! Stream session registry
//!
//! Tracks the producer tasks behind active broadcast and watch outcome
//! streams, keyed by user, so the stop operations can abort them and close
//! the streams. Uses `DashMap` for concurrent access.

use beam_core::Snowflake;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::task::AbortHandle;
use uuid::Uuid;

/// Handle to a running stream producer task
#[derive(Debug)]
pub struct SessionHandle {
    /// Opaque session identifier (for logging/correlation)
    pub session_id: String,
    abort: AbortHandle,
}

impl SessionHandle {
    /// Wrap a spawned producer task
    #[must_use]
    pub fn new(abort: AbortHandle) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            abort,
        }
    }

    /// Abort the producer task, closing its outcome stream
    pub fn abort(&self) {
        self.abort.abort();
    }
}

/// Registry of active broadcast and viewer stream sessions
///
/// One broadcast session and one viewer session per user at most;
/// registering a new one replaces (and aborts) the previous.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    broadcasts: DashMap<Snowflake, SessionHandle>,
    viewers: DashMap<Snowflake, SessionHandle>,
}

impl SessionRegistry {
    /// Create a new registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new registry wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a broadcast producer task for a user
    pub fn register_broadcast(&self, user_id: Snowflake, abort: AbortHandle) {
        let handle = SessionHandle::new(abort);
        tracing::debug!(
            user_id = %user_id,
            session_id = %handle.session_id,
            "Broadcast session registered"
        );

        if let Some(previous) = self.broadcasts.insert(user_id, handle) {
            previous.abort();
            tracing::debug!(user_id = %user_id, "Previous broadcast session replaced");
        }
    }

    /// Register a viewer producer task for a user
    pub fn register_viewer(&self, user_id: Snowflake, abort: AbortHandle) {
        let handle = SessionHandle::new(abort);
        tracing::debug!(
            user_id = %user_id,
            session_id = %handle.session_id,
            "Viewer session registered"
        );

        if let Some(previous) = self.viewers.insert(user_id, handle) {
            previous.abort();
            tracing::debug!(user_id = %user_id, "Previous viewer session replaced");
        }
    }

    /// Abort and remove a user's broadcast session; returns whether one existed
    pub fn end_broadcast(&self, user_id: Snowflake) -> bool {
        if let Some((_, handle)) = self.broadcasts.remove(&user_id) {
            handle.abort();
            tracing::debug!(user_id = %user_id, "Broadcast session ended");
            true
        } else {
            false
        }
    }

    /// Abort and remove a user's viewer session; returns whether one existed
    pub fn end_viewer(&self, user_id: Snowflake) -> bool {
        if let Some((_, handle)) = self.viewers.remove(&user_id) {
            handle.abort();
            tracing::debug!(user_id = %user_id, "Viewer session ended");
            true
        } else {
            false
        }
    }

    /// Remove a session without aborting (the producer task is exiting on
    /// its own, e.g. after the client dropped the stream)
    pub fn forget_broadcast(&self, user_id: Snowflake) {
        self.broadcasts.remove(&user_id);
    }

    /// Remove a viewer session without aborting
    pub fn forget_viewer(&self, user_id: Snowflake) {
        self.viewers.remove(&user_id);
    }

    /// Check whether a user has an active broadcast session
    pub fn is_broadcasting(&self, user_id: Snowflake) -> bool {
        self.broadcasts.contains_key(&user_id)
    }

    /// Check whether a user has an active viewer session
    pub fn is_watching(&self, user_id: Snowflake) -> bool {
        self.viewers.contains_key(&user_id)
    }

    /// Number of active broadcast sessions on this instance
    pub fn broadcast_count(&self) -> usize {
        self.broadcasts.len()
    }

    /// Number of active viewer sessions on this instance
    pub fn viewer_count(&self) -> usize {
        self.viewers.len()
    }
}

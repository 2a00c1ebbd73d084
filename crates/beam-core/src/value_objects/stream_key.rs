//! Stream key - opaque publish credential handed to a broadcaster
//!
//! The key authorizes pushing media to the ingest endpoint and must never
//! appear in logs or directory payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Broadcaster publish credential
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamKey(String);

impl StreamKey {
    /// Length of generated keys
    pub const LEN: usize = 24;

    /// Generate a fresh random key
    pub fn generate() -> Self {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let key = (0..Self::LEN)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect();
        Self(key)
    }

    /// Wrap an existing key (e.g. read back from the session store)
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw key value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Debug must not leak the credential
impl fmt::Debug for StreamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StreamKey(****)")
    }
}

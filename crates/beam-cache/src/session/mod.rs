//! Session storage module.
//!
//! Redis-backed storage for broadcast and viewer sessions.

mod broadcast_session;

pub use broadcast_session::{
    BroadcastSessionData, BroadcastSessionStore, BroadcastState, ViewerSessionData,
};

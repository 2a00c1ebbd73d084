//! # beam-core
//!
//! Domain layer containing entities, value objects, repository contracts,
//! store ports, and domain events. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{format_display_time, Account, LiveStream, Profile, Video, MAX_STREAM_TAGS};
pub use error::DomainError;
pub use events::DomainEvent;
pub use traits::{
    AccountStore, BroadcastDirectory, LiveStreamRepository, OutcomeStream, ProfileRepository,
    RepoResult, Thumbnail, VideoRepository, VideoStore,
};
pub use value_objects::{
    MediaUri, MediaUriError, Snowflake, SnowflakeGenerator, SnowflakeParseError, StreamKey,
};

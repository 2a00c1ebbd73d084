//! Traits - repository contracts and persistence ports

mod repositories;
mod stores;

pub use repositories::{
    LiveStreamRepository, OutcomeStream, ProfileRepository, RepoResult, Thumbnail,
    VideoRepository,
};
pub use stores::{AccountStore, BroadcastDirectory, VideoStore};

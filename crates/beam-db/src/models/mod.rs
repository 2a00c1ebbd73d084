//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod live_stream;
mod video;

pub use account::AccountModel;
pub use live_stream::LiveStreamModel;
pub use video::VideoModel;

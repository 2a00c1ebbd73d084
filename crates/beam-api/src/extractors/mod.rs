//! Request extractors

mod auth;
mod path;
mod validated;

pub use auth::AuthUser;
pub use path::{BroadcastIdPath, UserIdPath};
pub use validated::ValidatedJson;

//! Entity to model mappers
//!
//! Conversions between domain entities (beam-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod account;
mod live_stream;
mod video;

pub use account::AccountInsert;
pub use live_stream::LiveStreamInsert;
pub use video::VideoInsert;

//! Value objects - immutable types that represent domain concepts

mod media_uri;
mod snowflake;
mod stream_key;

pub use media_uri::{MediaUri, MediaUriError};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use stream_key::StreamKey;

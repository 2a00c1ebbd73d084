//! LiveStream entity <-> model mapper

use beam_core::entities::LiveStream;
use beam_core::value_objects::Snowflake;

use crate::models::LiveStreamModel;

/// Convert LiveStreamModel to LiveStream entity
impl From<LiveStreamModel> for LiveStream {
    fn from(model: LiveStreamModel) -> Self {
        LiveStream {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            title: model.title,
            thumbnail_url: model.thumbnail_url,
            user_name: model.user_name,
            user_profile_url: model.user_profile_url,
            tags: model.tags,
            started_at: model.started_at,
        }
    }
}

/// LiveStream values prepared for database insertion
pub struct LiveStreamInsert<'a> {
    pub id: i64,
    pub user_id: i64,
    pub title: &'a str,
    pub thumbnail_url: &'a str,
    pub user_name: &'a str,
    pub user_profile_url: &'a str,
    pub tags: &'a [String],
}

impl<'a> LiveStreamInsert<'a> {
    pub fn new(stream: &'a LiveStream) -> Self {
        Self {
            id: stream.id.into_inner(),
            user_id: stream.user_id.into_inner(),
            title: &stream.title,
            thumbnail_url: &stream.thumbnail_url,
            user_name: &stream.user_name,
            user_profile_url: &stream.user_profile_url,
            tags: &stream.tags,
        }
    }
}

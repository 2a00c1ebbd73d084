//! Video entity <-> model mapper

use beam_core::entities::Video;
use beam_core::value_objects::Snowflake;

use crate::models::VideoModel;

/// Convert VideoModel to Video entity
impl From<VideoModel> for Video {
    fn from(model: VideoModel) -> Self {
        Video {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            title: model.title,
            thumbnail_url: model.thumbnail_url,
            url: model.url,
            time: model.display_time,
            created_at: model.created_at,
        }
    }
}

/// Video values prepared for database insertion
pub struct VideoInsert<'a> {
    pub id: i64,
    pub user_id: i64,
    pub title: &'a str,
    pub thumbnail_url: &'a str,
    pub url: &'a str,
    pub display_time: &'a str,
}

impl<'a> VideoInsert<'a> {
    pub fn new(video: &'a Video) -> Self {
        Self {
            id: video.id.into_inner(),
            user_id: video.user_id.into_inner(),
            title: &video.title,
            thumbnail_url: &video.thumbnail_url,
            url: &video.url,
            display_time: &video.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_entity_keeps_display_time() {
        let model = VideoModel {
            id: 9,
            user_id: 7,
            title: "Unboxing".to_string(),
            thumbnail_url: "thumb".to_string(),
            url: "url".to_string(),
            display_time: "2025-03-14 09:26".to_string(),
            created_at: Utc::now(),
            deleted_at: None,
        };

        let video = Video::from(model);
        assert_eq!(video.id, Snowflake::new(9));
        assert_eq!(video.time, "2025-03-14 09:26");
    }
}

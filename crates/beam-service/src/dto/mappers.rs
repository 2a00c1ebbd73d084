//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use beam_core::entities::{Account, LiveStream, Profile, Video};
use beam_core::traits::Thumbnail;

use crate::services::{StreamSession, StreamSessionKind};

use super::responses::{
    AccountResponse, BroadcastSessionResponse, LiveStreamResponse, ProfileResponse,
    ThumbnailResponse, VideoResponse, WatchSessionResponse,
};

// ============================================================================
// Account Mappers
// ============================================================================

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            login_id: account.login_id.clone(),
            name: account.name.clone(),
            picture_url: account.picture_url.clone(),
            created_at: account.created_at,
        }
    }
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self::from(&account)
    }
}

// ============================================================================
// Live Stream Mappers
// ============================================================================

impl From<&LiveStream> for LiveStreamResponse {
    fn from(stream: &LiveStream) -> Self {
        Self {
            id: stream.id.to_string(),
            user_id: stream.user_id.to_string(),
            title: stream.title.clone(),
            thumbnail_url: stream.thumbnail_url.clone(),
            user_name: stream.user_name.clone(),
            user_profile_url: stream.user_profile_url.clone(),
            tags: stream.tags.clone(),
            started_at: stream.started_at,
        }
    }
}

impl From<LiveStream> for LiveStreamResponse {
    fn from(stream: LiveStream) -> Self {
        Self::from(&stream)
    }
}

/// Session payload for SSE delivery; broadcaster and viewer sides
/// serialize to different shapes
impl From<&StreamSession> for serde_json::Value {
    fn from(session: &StreamSession) -> Self {
        match &session.kind {
            StreamSessionKind::Broadcaster {
                stream_key,
                ingest_url,
            } => serde_json::json!(BroadcastSessionResponse {
                broadcast_id: session.broadcast_id.to_string(),
                stream_key: stream_key.as_str().to_string(),
                ingest_url: ingest_url.clone(),
            }),
            StreamSessionKind::Viewer { playback_url } => {
                serde_json::json!(WatchSessionResponse {
                    broadcast_id: session.broadcast_id.to_string(),
                    playback_url: playback_url.clone(),
                })
            }
        }
    }
}

// ============================================================================
// Video / Profile Mappers
// ============================================================================

impl From<&Video> for VideoResponse {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id.to_string(),
            user_id: video.user_id.to_string(),
            title: video.title.clone(),
            thumbnail_url: video.thumbnail_url.clone(),
            url: video.url.clone(),
            time: video.time.clone(),
            created_at: video.created_at,
        }
    }
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self::from(&video)
    }
}

impl From<&Thumbnail> for ThumbnailResponse {
    fn from(thumbnail: &Thumbnail) -> Self {
        Self {
            url: thumbnail.url.clone(),
        }
    }
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            picture_url: profile.picture_url.clone(),
            videos: profile.videos.iter().map(VideoResponse::from).collect(),
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beam_core::value_objects::{Snowflake, StreamKey};

    #[test]
    fn test_video_mapper_preserves_fields() {
        let video = Video::new(
            Snowflake::new(9),
            Snowflake::new(7),
            "Unboxing".to_string(),
            "thumb".to_string(),
            "url".to_string(),
        );

        let response = VideoResponse::from(&video);
        assert_eq!(response.id, "9");
        assert_eq!(response.user_id, "7");
        assert_eq!(response.title, "Unboxing");
        assert_eq!(response.time, video.time);
    }

    #[test]
    fn test_profile_mapper_keeps_video_order() {
        let older = Video::new(
            Snowflake::new(1),
            Snowflake::new(7),
            "a".to_string(),
            String::new(),
            String::new(),
        );
        let newer = Video::new(
            Snowflake::new(2),
            Snowflake::new(7),
            "b".to_string(),
            String::new(),
            String::new(),
        );
        let profile = Profile::new("Ada".to_string(), String::new(), vec![newer, older]);

        let response = ProfileResponse::from(&profile);
        assert_eq!(response.videos.len(), 2);
        assert_eq!(response.videos[0].id, "2");
        assert_eq!(response.videos[1].id, "1");
    }

    #[test]
    fn test_session_payload_shape() {
        let broadcaster = StreamSession {
            broadcast_id: Snowflake::new(5),
            kind: StreamSessionKind::Broadcaster {
                stream_key: StreamKey::new("secret"),
                ingest_url: "rtmp://ingest.test/live/secret".to_string(),
            },
        };
        let value = serde_json::Value::from(&broadcaster);
        assert_eq!(value["broadcast_id"], "5");
        assert_eq!(value["stream_key"], "secret");
        assert!(value.get("playback_url").is_none());

        let viewer = StreamSession {
            broadcast_id: Snowflake::new(5),
            kind: StreamSessionKind::Viewer {
                playback_url: "https://play.test/hls/5/index.m3u8".to_string(),
            },
        };
        let value = serde_json::Value::from(&viewer);
        assert_eq!(value["playback_url"], "https://play.test/hls/5/index.m3u8");
        assert!(value.get("stream_key").is_none());
    }
}

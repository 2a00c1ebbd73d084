//! Profile entity - a user profile aggregating an owned list of videos

use super::Video;

/// User profile as shown on the profile screen.
///
/// Owns its video list by value: the list is a snapshot taken at assembly
/// time, not a live reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub name: String,
    pub picture_url: String,
    pub videos: Vec<Video>,
}

impl Profile {
    /// Create a profile with its video snapshot
    pub fn new(name: String, picture_url: String, videos: Vec<Video>) -> Self {
        Self {
            name,
            picture_url,
            videos,
        }
    }

    /// Number of videos in the snapshot
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Snowflake;

    #[test]
    fn test_fields_preserved() {
        let video = Video::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "clip".to_string(),
            "thumb".to_string(),
            "url".to_string(),
        );
        let profile = Profile::new(
            "ada".to_string(),
            "https://cdn.example.com/p/2.png".to_string(),
            vec![video.clone()],
        );

        assert_eq!(profile.name, "ada");
        assert_eq!(profile.picture_url, "https://cdn.example.com/p/2.png");
        assert_eq!(profile.videos, vec![video]);
    }

    #[test]
    fn test_empty_video_list_is_empty_not_absent() {
        let profile = Profile::new("ada".to_string(), String::new(), Vec::new());
        assert!(profile.videos.is_empty());
        assert_eq!(profile.video_count(), 0);
    }

    #[test]
    fn test_default_fields_are_empty_strings() {
        let profile = Profile::default();
        assert_eq!(profile.name, "");
        assert_eq!(profile.picture_url, "");
        assert!(profile.videos.is_empty());
    }
}

//! Video entity - a stored video's metadata and playback URL

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Video entity representing an uploaded, playable video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub title: String,
    pub thumbnail_url: String,
    pub url: String,
    /// Preformatted time text shown in video lists. Stored as opaque text;
    /// `Video::new` derives it from `created_at` but existing rows keep
    /// whatever the backend recorded.
    pub time: String,
    pub created_at: DateTime<Utc>,
}

impl Video {
    /// Create a new Video uploaded now
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        title: String,
        thumbnail_url: String,
        url: String,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            id,
            user_id,
            title,
            thumbnail_url,
            url,
            time: format_display_time(created_at),
            created_at,
        }
    }
}

/// Format a timestamp the way video lists display it
pub fn format_display_time(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(id: i64) -> Video {
        Video::new(
            Snowflake::new(id),
            Snowflake::new(7),
            "Unboxing".to_string(),
            "https://cdn.example.com/t/9.jpg".to_string(),
            "https://cdn.example.com/v/9.mp4".to_string(),
        )
    }

    #[test]
    fn test_fields_preserved() {
        let video = sample(9);
        assert_eq!(video.id, Snowflake::new(9));
        assert_eq!(video.user_id, Snowflake::new(7));
        assert_eq!(video.title, "Unboxing");
        assert_eq!(video.thumbnail_url, "https://cdn.example.com/t/9.jpg");
        assert_eq!(video.url, "https://cdn.example.com/v/9.mp4");
        assert_eq!(video.time, format_display_time(video.created_at));
    }

    #[test]
    fn test_identical_fields_are_equal() {
        let a = sample(9);
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_any_differing_field_breaks_equality() {
        let a = sample(9);

        let mut b = a.clone();
        b.id = Snowflake::new(10);
        assert_ne!(a, b);

        let mut c = a.clone();
        c.url = "https://cdn.example.com/v/other.mp4".to_string();
        assert_ne!(a, c);

        let mut d = a.clone();
        d.time = "yesterday".to_string();
        assert_ne!(a, d);
    }

    #[test]
    fn test_display_time_format() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        assert_eq!(format_display_time(at), "2025-03-14 09:26");
    }
}

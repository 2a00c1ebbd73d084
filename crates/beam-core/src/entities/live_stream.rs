//! LiveStream entity - a broadcast currently visible in the live directory

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Maximum number of tags a broadcast may carry
pub const MAX_STREAM_TAGS: usize = 10;

/// A live broadcast entry as presented in the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveStream {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub title: String,
    pub thumbnail_url: String,
    pub user_name: String,
    pub user_profile_url: String,
    pub tags: Vec<String>,
    pub started_at: DateTime<Utc>,
}

impl LiveStream {
    /// Create a new LiveStream entry starting now
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        title: String,
        user_name: String,
        user_profile_url: String,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            thumbnail_url: String::new(),
            user_name,
            user_profile_url,
            tags: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Set the directory thumbnail
    pub fn with_thumbnail(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = thumbnail_url.into();
        self
    }

    /// Attach tags, truncated to `MAX_STREAM_TAGS`
    pub fn with_tags(mut self, mut tags: Vec<String>) -> Self {
        tags.truncate(MAX_STREAM_TAGS);
        self.tags = tags;
        self
    }

    /// Check whether the broadcast carries the given tag (case-insensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Seconds the broadcast has been live
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LiveStream {
        LiveStream::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "Morning run".to_string(),
            "runner".to_string(),
            "https://cdn.example.com/u/2.png".to_string(),
        )
    }

    #[test]
    fn test_fields_preserved() {
        let stream = sample()
            .with_thumbnail("https://cdn.example.com/t/1.jpg")
            .with_tags(vec!["sport".to_string(), "outdoor".to_string()]);

        assert_eq!(stream.id, Snowflake::new(1));
        assert_eq!(stream.user_id, Snowflake::new(2));
        assert_eq!(stream.title, "Morning run");
        assert_eq!(stream.thumbnail_url, "https://cdn.example.com/t/1.jpg");
        assert_eq!(stream.user_name, "runner");
        assert_eq!(stream.user_profile_url, "https://cdn.example.com/u/2.png");
        assert_eq!(stream.tags, vec!["sport", "outdoor"]);
    }

    #[test]
    fn test_value_equality() {
        let a = sample();
        let mut b = a.clone();
        assert_eq!(a, b);

        b.title = "Evening run".to_string();
        assert_ne!(a, b);
    }

    #[test]
    fn test_has_tag_is_case_insensitive() {
        let stream = sample().with_tags(vec!["Sport".to_string()]);
        assert!(stream.has_tag("sport"));
        assert!(stream.has_tag("SPORT"));
        assert!(!stream.has_tag("music"));
    }

    #[test]
    fn test_tags_truncated_to_limit() {
        let tags = (0..20).map(|i| format!("tag{i}")).collect();
        let stream = sample().with_tags(tags);
        assert_eq!(stream.tags.len(), MAX_STREAM_TAGS);
    }
}

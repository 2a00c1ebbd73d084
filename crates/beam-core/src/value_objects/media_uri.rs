//! Media URI - validated locator for media handed to the video operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Schemes a media locator may use
const SCHEMES: &[&str] = &["file://", "http://", "https://"];

/// A validated media locator (upload source or playback target)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediaUri(String);

/// Error when validating a media URI
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaUriError {
    #[error("media uri is empty")]
    Empty,

    #[error("unsupported media uri scheme: {0}")]
    UnsupportedScheme(String),

    #[error("media uri has no path")]
    MissingPath,
}

impl MediaUri {
    /// Validate and wrap a raw URI string
    pub fn parse(raw: &str) -> Result<Self, MediaUriError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(MediaUriError::Empty);
        }

        let rest = SCHEMES
            .iter()
            .find_map(|scheme| raw.strip_prefix(scheme))
            .ok_or_else(|| {
                let scheme = raw.split("://").next().unwrap_or(raw);
                MediaUriError::UnsupportedScheme(scheme.to_string())
            })?;

        if rest.is_empty() {
            return Err(MediaUriError::MissingPath);
        }

        Ok(Self(raw.to_string()))
    }

    /// The raw URI value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment without its extension, if any
    pub fn file_stem(&self) -> Option<&str> {
        let segment = self.0.rsplit('/').next()?;
        if segment.is_empty() {
            return None;
        }
        Some(segment.rsplit_once('.').map_or(segment, |(stem, _)| stem))
    }

    /// File extension of the last path segment, if any
    pub fn extension(&self) -> Option<&str> {
        let segment = self.0.rsplit('/').next()?;
        segment.rsplit_once('.').map(|(_, ext)| ext)
    }
}

impl fmt::Display for MediaUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MediaUri {
    type Err = MediaUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaUri::parse(s)
    }
}

impl TryFrom<String> for MediaUri {
    type Error = MediaUriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        MediaUri::parse(&value)
    }
}

impl From<MediaUri> for String {
    fn from(uri: MediaUri) -> Self {
        uri.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_known_schemes() {
        for raw in [
            "file:///videos/run.mp4",
            "http://cdn.example.com/v/run.mp4",
            "https://cdn.example.com/v/run.mp4",
        ] {
            let uri = MediaUri::parse(raw).unwrap();
            assert_eq!(uri.as_str(), raw);
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(MediaUri::parse(""), Err(MediaUriError::Empty));
        assert_eq!(MediaUri::parse("   "), Err(MediaUriError::Empty));
        assert_eq!(MediaUri::parse("https://"), Err(MediaUriError::MissingPath));
        assert!(matches!(
            MediaUri::parse("ftp://example.com/v.mp4"),
            Err(MediaUriError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_file_stem_and_extension() {
        let uri = MediaUri::parse("https://cdn.example.com/v/morning-run.mp4").unwrap();
        assert_eq!(uri.file_stem(), Some("morning-run"));
        assert_eq!(uri.extension(), Some("mp4"));

        let no_ext = MediaUri::parse("file:///videos/raw").unwrap();
        assert_eq!(no_ext.file_stem(), Some("raw"));
        assert_eq!(no_ext.extension(), None);
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let uri: MediaUri = serde_json::from_str("\"https://cdn.example.com/v/1.mp4\"").unwrap();
        assert_eq!(uri.as_str(), "https://cdn.example.com/v/1.mp4");

        let bad: Result<MediaUri, _> = serde_json::from_str("\"ftp://nope\"");
        assert!(bad.is_err());
    }
}

//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use beam_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with broadcast_id
#[derive(Debug, serde::Deserialize)]
pub struct BroadcastIdPath {
    pub broadcast_id: String,
}

impl BroadcastIdPath {
    /// Parse broadcast_id as Snowflake
    pub fn broadcast_id(&self) -> Result<Snowflake, ApiError> {
        self.broadcast_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid broadcast_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_id_parsing() {
        let path = BroadcastIdPath {
            broadcast_id: "12345".to_string(),
        };
        assert_eq!(path.broadcast_id().unwrap(), Snowflake::new(12345));

        let bad = BroadcastIdPath {
            broadcast_id: "not-an-id".to_string(),
        };
        assert!(bad.broadcast_id().is_err());
    }
}

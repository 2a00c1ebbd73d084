//! Data transfer objects
//!
//! Request DTOs (deserialized, validated), response DTOs (serialized), and
//! entity-to-DTO mappers.

mod mappers;
mod requests;
mod responses;

pub use requests::{
    AddVideoRequest, CreateThumbnailRequest, LoginRequest, RefreshTokenRequest,
    StartBroadcastRequest,
};
pub use responses::{
    AccountResponse, ApiResponse, AuthResponse, BroadcastSessionResponse, HealthChecks,
    HealthResponse, LiveStreamResponse, ProfileResponse, ReadinessResponse, ThumbnailResponse,
    VideoResponse, WatchSessionResponse,
};

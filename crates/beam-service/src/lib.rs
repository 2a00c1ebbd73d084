//! # beam-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! The three client-facing contracts from `beam-core`
//! (`LiveStreamRepository`, `ProfileRepository`, `VideoRepository`) are
//! implemented here as services over the persistence stores, the Redis
//! cache, and the pub/sub fabric.

pub mod dto;
pub mod services;

pub use dto::{
    AccountResponse, AddVideoRequest, ApiResponse, AuthResponse, BroadcastSessionResponse,
    CreateThumbnailRequest, HealthChecks, HealthResponse, LiveStreamResponse, LoginRequest,
    ProfileResponse, ReadinessResponse, RefreshTokenRequest, StartBroadcastRequest,
    ThumbnailResponse, VideoResponse, WatchSessionResponse,
};
pub use services::{
    LiveStreamService, ProfileService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SessionRegistry, StreamSession, StreamSessionKind, VideoService,
};

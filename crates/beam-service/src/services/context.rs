//! Service context - dependency container for services
//!
//! Holds all stores, cache facilities, and shared services the application
//! layer needs.

use std::sync::Arc;

use beam_cache::{
    BroadcastSessionStore, Publisher, SharedRedisPool, Subscriber, ViewerStore,
};
use beam_common::auth::JwtService;
use beam_common::config::{IngestConfig, StorageConfig};
use beam_core::traits::{AccountStore, BroadcastDirectory, VideoStore};
use beam_core::SnowflakeGenerator;
use beam_db::PgPool;

use super::session::SessionRegistry;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Persistence stores (accounts, videos, live directory)
/// - Redis-backed session/viewer stores and pub/sub
/// - JWT service for authentication
/// - Snowflake generator for ID generation
/// - The in-process session registry for stream cancellation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Stores
    account_store: Arc<dyn AccountStore>,
    video_store: Arc<dyn VideoStore>,
    directory: Arc<dyn BroadcastDirectory>,

    // Cache facilities
    session_store: BroadcastSessionStore,
    viewer_store: ViewerStore,
    publisher: Publisher,
    subscriber: Arc<Subscriber>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    // Media endpoints and storage layout
    ingest: IngestConfig,
    storage: StorageConfig,

    // In-process stream session registry
    registry: Arc<SessionRegistry>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        redis_pool: SharedRedisPool,
        account_store: Arc<dyn AccountStore>,
        video_store: Arc<dyn VideoStore>,
        directory: Arc<dyn BroadcastDirectory>,
        subscriber: Arc<Subscriber>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        ingest: IngestConfig,
        storage: StorageConfig,
    ) -> Self {
        // Clone the inner RedisPool from the Arc
        let inner_pool = (*redis_pool).clone();
        let session_store = BroadcastSessionStore::new(inner_pool.clone());
        let viewer_store = ViewerStore::new(inner_pool.clone());
        let publisher = Publisher::new(inner_pool);

        Self {
            pool,
            redis_pool,
            account_store,
            video_store,
            directory,
            session_store,
            viewer_store,
            publisher,
            subscriber,
            jwt_service,
            snowflake_generator,
            ingest,
            storage,
            registry: SessionRegistry::new_shared(),
        }
    }

    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Stores ===

    /// Get the account store
    pub fn account_store(&self) -> &dyn AccountStore {
        self.account_store.as_ref()
    }

    /// Get the video store
    pub fn video_store(&self) -> &dyn VideoStore {
        self.video_store.as_ref()
    }

    /// Get the broadcast directory
    pub fn directory(&self) -> &dyn BroadcastDirectory {
        self.directory.as_ref()
    }

    // === Cache facilities ===

    /// Get the broadcast/viewer session store
    pub fn session_store(&self) -> &BroadcastSessionStore {
        &self.session_store
    }

    /// Get the viewer set store
    pub fn viewer_store(&self) -> &ViewerStore {
        &self.viewer_store
    }

    /// Get the Redis pub/sub publisher
    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// Get the Redis pub/sub subscriber
    pub fn subscriber(&self) -> &Subscriber {
        self.subscriber.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> beam_core::Snowflake {
        self.snowflake_generator.generate()
    }

    /// Get the media ingest/playback endpoints
    pub fn ingest(&self) -> &IngestConfig {
        &self.ingest
    }

    /// Get the storage layout configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// Get the stream session registry
    pub fn registry(&self) -> &SessionRegistry {
        self.registry.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("stores", &"...")
            .field("registry", &self.registry)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    account_store: Option<Arc<dyn AccountStore>>,
    video_store: Option<Arc<dyn VideoStore>>,
    directory: Option<Arc<dyn BroadcastDirectory>>,
    subscriber: Option<Arc<Subscriber>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    ingest: Option<IngestConfig>,
    storage: Option<StorageConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn account_store(mut self, store: Arc<dyn AccountStore>) -> Self {
        self.account_store = Some(store);
        self
    }

    pub fn video_store(mut self, store: Arc<dyn VideoStore>) -> Self {
        self.video_store = Some(store);
        self
    }

    pub fn directory(mut self, directory: Arc<dyn BroadcastDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn subscriber(mut self, subscriber: Arc<Subscriber>) -> Self {
        self.subscriber = Some(subscriber);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn ingest(mut self, ingest: IngestConfig) -> Self {
        self.ingest = Some(ingest);
        self
    }

    pub fn storage(mut self, storage: StorageConfig) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            self.account_store
                .ok_or_else(|| ServiceError::validation("account_store is required"))?,
            self.video_store
                .ok_or_else(|| ServiceError::validation("video_store is required"))?,
            self.directory
                .ok_or_else(|| ServiceError::validation("directory is required"))?,
            self.subscriber
                .ok_or_else(|| ServiceError::validation("subscriber is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.ingest
                .ok_or_else(|| ServiceError::validation("ingest config is required"))?,
            self.storage
                .ok_or_else(|| ServiceError::validation("storage config is required"))?,
        ))
    }
}

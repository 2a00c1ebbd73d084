//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use beam_cache::{RedisPool, RedisPoolConfig, Subscriber, SubscriberConfig};
use beam_common::{AppConfig, AppError, JwtService};
use beam_core::SnowflakeGenerator;
use beam_db::{create_pool, PgAccountStore, PgBroadcastDirectory, PgVideoStore};
use beam_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, create_cors_layer};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = create_cors_layer(&state.config().cors, state.config().app.env.is_production());

    let router = create_router().merge(health_routes());
    let router = apply_middleware(router).layer(cors);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = beam_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    beam_db::run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool = RedisPool::new(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    let shared_redis = Arc::new(redis_pool);
    info!("Redis connection established");

    // Start the pub/sub subscriber
    let subscriber = Subscriber::new(SubscriberConfig {
        redis_url: config.redis.url.clone(),
        ..SubscriberConfig::default()
    })
    .await
    .map_err(|e| AppError::Cache(e.to_string()))?;

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create stores
    let account_store = Arc::new(PgAccountStore::new(pool.clone()));
    let video_store = Arc::new(PgVideoStore::new(pool.clone()));
    let directory = Arc::new(PgBroadcastDirectory::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .redis_pool(shared_redis)
        .account_store(account_store)
        .video_store(video_store)
        .directory(directory)
        .subscriber(Arc::new(subscriber))
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .ingest(config.ingest.clone())
        .storage(config.storage.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}

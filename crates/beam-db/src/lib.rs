//! # beam-db
//!
//! Database layer implementing the store traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the store traits
//! defined in `beam-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> Model mappers
//! - Store implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use beam_db::pool::{create_pool, DatabaseConfig};
//! use beam_db::PgVideoStore;
//! use beam_core::traits::VideoStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let videos = PgVideoStore::new(pool);
//!
//!     // Use the store...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgAccountStore, PgBroadcastDirectory, PgVideoStore};

/// Apply embedded migrations to the database
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

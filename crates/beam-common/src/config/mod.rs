//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, IngestConfig,
    JwtConfig, RedisConfig, ServerConfig, SnowflakeConfig, StorageConfig,
};

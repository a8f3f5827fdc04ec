use config::Config;
use redis::Client as RedisClient;
use sqlx::PgPool;
use std::sync::Arc;

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod service;

/// Shared handles for one running process. The pool and the Redis client are
/// long-lived and safe for concurrent use; they are passed down explicitly
/// rather than read from globals so tests can substitute fakes.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub redis: Arc<RedisClient>,
}

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient, RedisError};
use std::sync::Arc;
use std::time::Duration;

/// Cache protocol consumed by the cached services. Implementations are
/// best-effort: callers treat every failure as a miss, never as a request
/// failure.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RedisError>;

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), RedisError>;

    /// Deletes every key matching the prefix pattern. Partial failure
    /// mid-scan is tolerated; whatever survives expires by TTL.
    async fn delete_matching(&self, pattern: &str) -> Result<(), RedisError>;
}

/// Redis-backed cache. Connections are multiplexed over the shared client,
/// acquired per operation.
pub struct RedisCache {
    client: Arc<RedisClient>,
}

impl RedisCache {
    pub fn new(client: Arc<RedisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(key, value, ttl.as_secs()).await?;
        Ok(())
    }

    async fn delete_matching(&self, pattern: &str) -> Result<(), RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        // Cursor scan instead of KEYS: never blocks the server on a large
        // keyspace, and keys deleted mid-scan are simply skipped.
        let mut cursor: u64 = 0;
        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await?;

            if !keys.is_empty() {
                let _: () = conn.del(keys).await?;
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        Ok(())
    }
}

//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Namespace shared by every key this service writes.
const KEY_PREFIX: &str = "players-api:";

fn namespaced_key(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

/// `SETEX` rejects a zero expiration.
fn effective_ttl(requested: Option<u64>, default_ttl: u64) -> u64 {
    requested.unwrap_or(default_ttl).max(1)
}

/// Redis cache, shared by every instance pointed at the same server.
///
/// Reads, writes and deletes are fail-open: a Redis fault is logged and
/// reported to the caller as a miss or a no-op, never as an error.
pub struct RedisCache {
    connection: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Connects and checks the server with a PING.
    ///
    /// `default_ttl_seconds` applies when [`CacheService::set`] is called
    /// with `ttl_seconds = None`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::ConnectionError(format!("Invalid Redis URL: {}", e)))?;

        let connection = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut probe = connection.clone();
        probe
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis (default TTL: {}s)", default_ttl_seconds);

        Ok(Self {
            connection,
            default_ttl: default_ttl_seconds,
        })
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection.clone();

        match conn.get::<_, Option<String>>(namespaced_key(key)).await {
            Ok(value) => {
                debug!(key, hit = value.is_some(), "Redis GET");
                Ok(value)
            }
            Err(e) => {
                warn!(key, error = %e, "Redis GET failed, treating as miss");
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let mut conn = self.connection.clone();
        let ttl = effective_ttl(ttl_seconds, self.default_ttl);

        if let Err(e) = conn
            .set_ex::<_, _, ()>(namespaced_key(key), value, ttl)
            .await
        {
            warn!(key, error = %e, "Redis SET failed");
        } else {
            debug!(key, ttl, bytes = value.len(), "Redis SET");
        }
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.connection.clone();

        match conn.del::<_, u32>(namespaced_key(key)).await {
            Ok(removed) => debug!(key, removed, "Redis DEL"),
            Err(e) => warn!(key, error = %e, "Redis DEL failed"),
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.connection.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

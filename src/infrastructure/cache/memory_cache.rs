//! Process-local cache backed by a concurrent hash map.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct CacheEntry {
    value: String,
    /// `None` when the TTL reaches past what `Instant` can represent.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// In-memory cache with absolute per-entry expiration.
///
/// Expired entries read as absent and are dropped on the access that finds
/// them. Values are stored by value, so a hit returns a copy of what was set.
pub struct InMemoryCache {
    entries: DashMap<String, CacheEntry>,
    default_ttl: Duration,
}

impl InMemoryCache {
    /// Creates an empty cache.
    ///
    /// `default_ttl_seconds` applies when [`CacheService::set`] is called with
    /// `ttl_seconds = None`.
    pub fn new(default_ttl_seconds: u64) -> Self {
        debug!(
            "Using InMemoryCache (default TTL: {}s)",
            default_ttl_seconds
        );
        Self {
            entries: DashMap::new(),
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let now = Instant::now();

        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired(now) {
                debug!("Cache HIT: {}", key);
                return Ok(Some(entry.value.clone()));
            }
        } else {
            debug!("Cache MISS: {}", key);
            return Ok(None);
        }

        // Re-check under the write lock so a concurrent fresh `set` survives.
        self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        debug!("Cache EXPIRED: {}", key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let ttl = ttl_seconds
            .map(Duration::from_secs)
            .unwrap_or(self.default_ttl);

        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at: Instant::now().checked_add(ttl),
            },
        );
        debug!("Cache SET: {} (TTL: {}s)", key, ttl.as_secs());
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        if self.entries.remove(key).is_some() {
            debug!("Cache INVALIDATE: {}", key);
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

//! Caching layer.
//!
//! Provides a [`CacheService`] trait with three implementations:
//! - [`InMemoryCache`] - Process-local cache, the default
//! - [`RedisCache`] - Redis-backed cache, used when `REDIS_URL` is configured
//! - [`NullCache`] - No-op implementation for disabled caching

mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use memory_cache::InMemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};

#[cfg(test)]
pub use service::MockCacheService;

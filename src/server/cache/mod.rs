//! Response cache for GET endpoints.
//!
//! Responses are stored as JSON under a key built from the request path and query string and
//! expire after a fixed lifetime. Writes never invalidate entries. A failing backend never fails
//! a request: the error is logged and the response is loaded from the database instead.

pub mod memory;
pub mod redis;

use std::{future::Future, sync::Arc, time::Duration};

use axum::http::Uri;
use serde::{de::DeserializeOwned, Serialize};

use crate::server::{
    cache::{memory::MemoryCache, redis::RedisCache},
    error::Error,
};

/// Prefix of every cache key
pub static CACHE_KEY_PREFIX: &str = "upravdom:cache:";

/// Maximum number of entries kept by the in-process backend
const MEMORY_CACHE_MAX_ENTRIES: usize = 1024;

/// Cache backend shared by all request handlers
#[derive(Clone)]
pub enum ResponseCache {
    /// In-process map, used when no Valkey/Redis URL is configured
    Memory(Arc<MemoryCache>),
    /// Valkey/Redis through a `fred` pool
    Redis(RedisCache),
}

impl ResponseCache {
    /// Creates an empty in-process cache
    pub fn memory() -> Self {
        Self::Memory(Arc::new(MemoryCache::new(MEMORY_CACHE_MAX_ENTRIES)))
    }

    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Memory(cache) => Ok(cache.get(key).await),
            Self::Redis(cache) => cache.get(key).await,
        }
    }

    async fn set(&self, key: String, value: String, ttl: Duration) -> Result<(), Error> {
        match self {
            Self::Memory(cache) => {
                cache.insert(key, value, ttl).await;
                Ok(())
            }
            Self::Redis(cache) => cache.set(key, value, ttl).await,
        }
    }
}

/// Builds the cache key of a request from its path and query string
pub fn request_key(uri: &Uri) -> String {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    format!("{}{}", CACHE_KEY_PREFIX, path_and_query)
}

/// Returns the cached value under the key produced by `key_builder`, or runs `loader` and caches
/// its result for `ttl`.
///
/// Errors from `loader` are returned as is and never cached.
pub async fn cached<T, K, F, Fut>(
    cache: &ResponseCache,
    key_builder: K,
    ttl: Duration,
    loader: F,
) -> Result<T, Error>
where
    T: Serialize + DeserializeOwned,
    K: FnOnce() -> String,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let key = key_builder();

    match cache.get(&key).await {
        Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
            Ok(value) => {
                tracing::debug!(key = %key, "Cache hit");

                return Ok(value);
            }
            Err(e) => tracing::warn!(key = %key, "Discarding unreadable cache entry: {}", e),
        },
        Ok(None) => tracing::debug!(key = %key, "Cache miss"),
        Err(e) => tracing::warn!(key = %key, "Failed to read response cache: {}", e),
    }

    let value = loader().await?;

    match serde_json::to_string(&value) {
        Ok(raw) => {
            if let Err(e) = cache.set(key.clone(), raw, ttl).await {
                tracing::warn!(key = %key, "Failed to write response cache: {}", e);
            }
        }
        Err(e) => tracing::warn!(key = %key, "Failed to serialize response for cache: {}", e),
    }

    Ok(value)
}

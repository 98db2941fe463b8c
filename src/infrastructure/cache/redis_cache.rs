//! Redis-backed alias cache.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Namespace for cache keys, so the service shares a Redis with other users.
const KEY_PREFIX: &str = "shortlink:";

/// Redis cache in front of the link store.
///
/// Holds a `ConnectionManager`, which multiplexes and reconnects on its own.
/// After a successful [`connect`](RedisCache::connect), every operation is
/// fail-open: a Redis error is logged and reported as a miss (or a dropped
/// write), never as a request failure.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: usize,
}

impl RedisCache {
    /// Opens the connection and verifies it with a PING.
    ///
    /// `default_ttl_seconds` is the expiry applied when [`CacheService::set_url`]
    /// gets no explicit TTL.
    ///
    /// # Errors
    ///
    /// [`CacheError::ConnectionError`] when the URL does not parse, the
    /// connection cannot be established, or the PING fails. The caller
    /// decides whether to fall back to running uncached.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds as usize,
        })
    }

    fn cache_key(alias: &str) -> String {
        format!("{KEY_PREFIX}{alias}")
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>> {
        let key = Self::cache_key(alias);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => {
                debug!("Cache hit for {}: {}", alias, url);
                Ok(Some(url))
            }
            Ok(None) => {
                debug!("Cache miss for {}", alias);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET failed for {}: {}", alias, e);
                Ok(None)
            }
        }
    }

    async fn set_url(&self, alias: &str, original_url: &str, ttl: Option<usize>) -> CacheResult<()> {
        let key = Self::cache_key(alias);
        let mut conn = self.client.clone();
        let ttl_seconds = ttl.unwrap_or(self.default_ttl);

        match conn
            .set_ex::<_, _, ()>(&key, original_url, ttl_seconds as u64)
            .await
        {
            Ok(_) => {
                debug!("Cached {} -> {} for {}s", alias, original_url, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET failed for {}: {}", alias, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

//! Alias cache abstraction.

use async_trait::async_trait;
use thiserror::Error;

/// Cache failures. Callers treat these as soft: a broken cache never fails
/// a request, it only costs a store round trip.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Read-through cache for alias to long URL mappings.
///
/// Implementations are fail-open. [`RedisCache`] swallows backend errors and
/// reports a miss; [`NullCache`] turns caching off entirely. Callers that do
/// see an `Err` log it and move on.
///
/// [`RedisCache`]: crate::infrastructure::cache::RedisCache
/// [`NullCache`]: crate::infrastructure::cache::NullCache
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Looks up the long URL cached under `alias`. A backend error reads as
    /// a miss.
    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>>;

    /// Caches `alias -> original_url`. A `ttl_seconds` of `None` applies the
    /// implementation's default expiry.
    async fn set_url(
        &self,
        alias: &str,
        original_url: &str,
        ttl_seconds: Option<usize>,
    ) -> CacheResult<()>;

    /// Backend liveness, surfaced by the health endpoint.
    async fn health_check(&self) -> bool;
}

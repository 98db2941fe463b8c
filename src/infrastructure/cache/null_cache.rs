//! No-op cache backend.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;

/// Cache backend that stores nothing.
///
/// Stands in when Redis is not configured or the startup connection fails;
/// every lookup is a miss, so all traffic resolves through the store.
#[derive(Default)]
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_url(&self, _alias: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_url(
        &self,
        _alias: &str,
        _original_url: &str,
        _ttl: Option<usize>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

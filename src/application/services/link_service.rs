//! Link creation, resolution, and stats service.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::domain::access_event::AccessEvent;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::base62;

/// Service for creating and resolving shortened links.
///
/// Owns the full resolution path: alias decoding, cache lookup, store
/// fallback, cache repopulation, and access-event dispatch. Handlers stay
/// thin and only translate HTTP.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    access_sender: mpsc::Sender<AccessEvent>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(
        repository: Arc<R>,
        cache: Arc<dyn CacheService>,
        access_sender: mpsc::Sender<AccessEvent>,
    ) -> Self {
        Self {
            repository,
            cache,
            access_sender,
        }
    }

    /// Creates a short link for the given URL.
    ///
    /// Every call allocates a fresh identity, so shortening the same URL
    /// twice yields two distinct aliases. The URL itself is taken as-is;
    /// format validation happens at the API boundary.
    ///
    /// The cache is primed with the new mapping before the alias is handed
    /// back, so a returned alias is immediately resolvable. A failed cache
    /// write only costs the first resolution a store round trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_short_link(&self, long_url: String) -> Result<Link, AppError> {
        let link = self.repository.insert(NewLink { long_url }).await?;
        let alias = link.alias();

        if let Err(e) = self.cache.set_url(&alias, &link.long_url, None).await {
            error!("Failed to cache URL for {}: {}", alias, e);
        }

        debug!("Created link {} -> {}", alias, link.long_url);

        Ok(link)
    }

    /// Resolves an alias to its original URL and records the access.
    ///
    /// # Cache Strategy
    ///
    /// - **Cache hit**: Immediate answer, no store round trip
    /// - **Cache miss**: Query store, then repopulate the cache
    /// - **Cache error**: Logged and treated as a miss
    ///
    /// A failed cache write never fails the resolution. On success an
    /// [`AccessEvent`] is queued for the background worker; when the queue
    /// is full the event is dropped rather than delaying the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias doesn't decode to an
    /// issued identity or no link exists for it.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        let cached = match self.cache.get_url(alias).await {
            Ok(hit) => hit,
            Err(e) => {
                error!("Cache error: {}", e);
                None
            }
        };

        let long_url = match cached {
            Some(cached_url) => {
                debug!("Cache HIT for {}", alias);
                cached_url
            }
            None => {
                debug!("Cache MISS for {}", alias);

                let link = self.find_link(alias).await?;

                if let Err(e) = self.cache.set_url(alias, &link.long_url, None).await {
                    error!("Failed to cache URL for {}: {}", alias, e);
                }

                link.long_url
            }
        };

        self.record_access(alias);

        Ok(long_url)
    }

    /// Retrieves a link with its current access count.
    ///
    /// Always reads from the store so the reported count reflects every
    /// increment applied so far. Does not count as an access itself.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias doesn't decode to an
    /// issued identity or no link exists for it.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link_stats(&self, alias: &str) -> Result<Link, AppError> {
        self.find_link(alias).await
    }

    /// Looks up the link behind an alias.
    ///
    /// An alias that doesn't decode cannot reference any row, so it maps to
    /// the same not-found outcome as a missing link.
    async fn find_link(&self, alias: &str) -> Result<Link, AppError> {
        let id = decode_alias(alias).ok_or_else(|| alias_not_found(alias))?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| alias_not_found(alias))
    }

    /// Queues an access event for the background worker (fire-and-forget).
    fn record_access(&self, alias: &str) {
        if let Err(e) = self.access_sender.try_send(AccessEvent::new(alias)) {
            warn!("Failed to enqueue access event for {}: {}", alias, e);
        }
    }
}

/// Decodes an alias into a store identity, or `None` when it can't match.
fn decode_alias(alias: &str) -> Option<i64> {
    base62::decode(alias).ok().and_then(|n| i64::try_from(n).ok())
}

fn alias_not_found(alias: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "alias": alias }))
}

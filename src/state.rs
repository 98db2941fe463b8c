//! Shared application state injected into HTTP handlers.

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::LinkService;
use crate::domain::access_event::AccessEvent;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::PgLinkRepository;

/// Shared state available to every handler.
///
/// The pool and sender are kept alongside the service so the health endpoint
/// can probe each component directly.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub cache: Arc<dyn CacheService>,
    pub access_sender: mpsc::Sender<AccessEvent>,
}

impl AppState {
    /// Wires the application state from its infrastructure pieces.
    pub fn new(
        db: Arc<PgPool>,
        access_sender: mpsc::Sender<AccessEvent>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        let repository = Arc::new(PgLinkRepository::new(db.clone()));
        let link_service = Arc::new(LinkService::new(
            repository,
            cache.clone(),
            access_sender.clone(),
        ));

        Self {
            db,
            link_service,
            cache,
            access_sender,
        }
    }
}

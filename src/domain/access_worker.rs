//! Background worker applying deferred access-count increments.
//!
//! Events arrive on an mpsc channel and are applied one at a time through
//! [`LinkRepository::increment_access_count`]. A failed or unmatched event is
//! logged and skipped; the worker itself never terminates on error, only when
//! every sender has been dropped.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::access_event::AccessEvent;
use crate::domain::repositories::LinkRepository;
use crate::utils::base62;

/// Consumes access events until the channel closes.
///
/// Each event's alias is decoded back to the link identity before the
/// increment. Aliases that decode to nothing a store could hold (invalid
/// characters, values past the signed identity range) are dropped silently:
/// the redirect they came from has already been answered.
pub async fn run_access_worker<R: LinkRepository>(
    mut rx: mpsc::Receiver<AccessEvent>,
    repository: Arc<R>,
) {
    while let Some(event) = rx.recv().await {
        let id = match base62::decode(&event.alias).map(i64::try_from) {
            Ok(Ok(id)) => id,
            _ => {
                debug!(alias = %event.alias, "Skipping access event with undecodable alias");
                continue;
            }
        };

        match repository.increment_access_count(id).await {
            Ok(true) => {}
            Ok(false) => {
                debug!(alias = %event.alias, "Access event matched no link");
            }
            Err(e) => {
                warn!(alias = %event.alias, "Failed to record link access: {e}");
            }
        }
    }

    debug!("Access worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::error::AppError;
    use mockall::predicate::eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_worker_increments_decoded_identity() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_increment_access_count()
            .with(eq(100_000_000i64))
            .times(1)
            .returning(|_| Ok(true));

        let (tx, rx) = mpsc::channel(8);
        tx.send(AccessEvent::new("6laZE")).await.unwrap();
        drop(tx);

        run_access_worker(rx, Arc::new(mock_repo)).await;
    }

    #[tokio::test]
    async fn test_worker_skips_undecodable_alias() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_increment_access_count().times(0);

        let (tx, rx) = mpsc::channel(8);
        tx.send(AccessEvent::new("not valid!")).await.unwrap();
        drop(tx);

        run_access_worker(rx, Arc::new(mock_repo)).await;
    }

    #[tokio::test]
    async fn test_worker_tolerates_unknown_link() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_increment_access_count()
            .times(1)
            .returning(|_| Ok(false));

        let (tx, rx) = mpsc::channel(8);
        tx.send(AccessEvent::new("zzzz")).await.unwrap();
        drop(tx);

        run_access_worker(rx, Arc::new(mock_repo)).await;
    }

    #[tokio::test]
    async fn test_worker_continues_after_store_error() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_increment_access_count()
            .times(2)
            .returning(|id| {
                if id == 1 {
                    Err(AppError::internal("Database error", json!({})))
                } else {
                    Ok(true)
                }
            });

        let (tx, rx) = mpsc::channel(8);
        tx.send(AccessEvent::new("1")).await.unwrap();
        tx.send(AccessEvent::new("2")).await.unwrap();
        drop(tx);

        run_access_worker(rx, Arc::new(mock_repo)).await;
    }
}

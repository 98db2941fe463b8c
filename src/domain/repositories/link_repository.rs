//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// The store allocates link identities; callers never supply an `id`. Lookups
/// are by identity only, since the public alias is a pure encoding of it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link, allocating the next identity.
    ///
    /// The returned [`Link`] carries the assigned `id` and a zero access
    /// count. The same long URL may be inserted any number of times; each
    /// insert yields a distinct identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its identity.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if no link has this identity
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Atomically adds one to a link's access counter.
    ///
    /// The increment happens in a single statement so concurrent updates
    /// never lose counts. Returns `Ok(true)` if a link matched, `Ok(false)`
    /// if no link has this identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_access_count(&self, id: i64) -> Result<bool, AppError>;
}

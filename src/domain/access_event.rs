//! Access event model for asynchronous hit counting.

/// An in-memory representation of a link access for async processing.
///
/// Used to pass the accessed alias from HTTP handlers to the background
/// worker via a channel. This decouples the HTTP response from database
/// writes, allowing fast redirects without blocking.
///
/// # Design
///
/// - Carries the alias rather than the decoded identity, so producers never
///   fail: decoding and existence checks happen in the worker
/// - Cloneable for sending across async boundaries
///
/// # Usage Flow
///
/// 1. Created in the redirect handler after a successful resolution
/// 2. Sent to the channel (non-blocking; dropped when the queue is full)
/// 3. Processed by [`crate::domain::access_worker::run_access_worker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEvent {
    pub alias: String,
}

impl AccessEvent {
    /// Creates a new access event for the given alias.
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }
}

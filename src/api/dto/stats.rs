//! DTOs for link statistics endpoint.

use serde::Serialize;

use crate::domain::entities::Link;

/// Statistics for a specific short link.
///
/// The access count reflects increments applied by the background worker so
/// far, not accesses still sitting in the queue.
#[derive(Debug, Serialize)]
pub struct LinkStatsResponse {
    pub long_url: String,
    pub short_link: String,
    pub access_count: i64,
}

impl From<Link> for LinkStatsResponse {
    fn from(link: Link) -> Self {
        let short_link = link.alias();

        Self {
            long_url: link.long_url,
            short_link,
            access_count: link.access_count,
        }
    }
}

//! Link entity representing a shortened URL mapping.

use crate::utils::base62;

/// A shortened URL link.
///
/// The short alias is not stored: it is derived from `id` on demand, so the
/// identity column is the single source of truth for alias assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub long_url: String,
    pub access_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, long_url: String, access_count: i64) -> Self {
        Self {
            id,
            long_url,
            access_count,
        }
    }

    /// Returns the short alias derived from this link's identity.
    pub fn alias(&self) -> String {
        base62::encode(self.id as u64)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = Link::new(100_000_000, "https://example.com".to_string(), 0);

        assert_eq!(link.id, 100_000_000);
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.access_count, 0);
    }

    #[test]
    fn test_alias_is_derived_from_id() {
        let link = Link::new(100_000_000, "https://example.com".to_string(), 0);
        assert_eq!(link.alias(), "6laZE");

        let link = Link::new(100_000_001, "https://example.com".to_string(), 7);
        assert_eq!(link.alias(), "6laZF");
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            long_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.long_url, "https://rust-lang.org");
    }
}

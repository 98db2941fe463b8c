//! SQLx-backed implementations of the domain repository traits.

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;

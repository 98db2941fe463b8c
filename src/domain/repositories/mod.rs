//! Data-access traits the domain layer programs against.
//!
//! Concrete implementations live in `crate::infrastructure::persistence`;
//! tests get `mockall`-generated doubles.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;

//! Concrete backends for the interfaces the domain layer defines: Postgres
//! persistence and the Redis cache.

pub mod cache;
pub mod persistence;

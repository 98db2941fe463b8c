//! Core model of the service: entities, repository contracts, and the
//! deferred access-counting pipeline. Nothing here knows about HTTP,
//! Postgres, or Redis.
//!
//! Access counting runs out of band: the redirect handler pushes an
//! [`access_event::AccessEvent`] onto a bounded channel and returns, and
//! [`access_worker::run_access_worker`] drains the channel into
//! [`repositories::LinkRepository`] increments.

pub mod access_event;
pub mod access_worker;
pub mod entities;
pub mod repositories;

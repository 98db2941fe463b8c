//! Use-case orchestration between the HTTP layer and the domain.

pub mod link_service;

pub use link_service::LinkService;

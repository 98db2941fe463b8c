//! Request and response bodies, serde-serialized and validator-checked.

pub mod create;
pub mod health;
pub mod stats;

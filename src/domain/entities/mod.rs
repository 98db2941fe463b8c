//! Plain data structures the rest of the crate moves around.
//!
//! [`NewLink`] carries the input for a record to be created; [`Link`] is
//! what the store hands back once an identity has been assigned.

pub mod link;

pub use link::{Link, NewLink};

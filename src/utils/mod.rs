//! Utility functions used across the application.
//!
//! - [`base62`] - Radix-62 alias encoding and decoding

pub mod base62;

//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod schema;
pub mod seed;
pub mod serve;

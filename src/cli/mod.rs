//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `schema` - Create missing tables
//! - `seed` - Load demo data

pub mod args;

pub use args::{Cli, Commands, ServeArgs};

//! Employee API - Read-only employee directory
//!
//! REST endpoints over SeaORM projections of an employee/department
//! schema: a plain and a paginated basic-information list and the
//! employee/department detail view.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Enumerations, composite keys and read models
//! - **services**: Application use cases
//! - **infra**: Database, schema bootstrap, repositories, Unit of Work
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared types (pagination)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create tables and start the server
//! cargo run -- serve
//!
//! # Load demo rows
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};

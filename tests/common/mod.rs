//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use employee_api::commands::seed::seed;
use employee_api::config::Config;
use employee_api::infra::Database;

/// Private in-memory SQLite database, no tables.
pub async fn empty_database() -> Database {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_min_connections: 1,
        ..Config::default()
    };
    Database::connect(&config).await.unwrap()
}

/// In-memory database with every table created.
pub async fn memory_database() -> Database {
    let db = empty_database().await;
    db.ensure_schema().await.unwrap();
    db
}

/// Tables plus the demo rows: Ana and Iker in D1, Marta in D2, Leo unassigned.
pub async fn seeded_database() -> Arc<Database> {
    let db = memory_database().await;
    seed(db.connection()).await.unwrap();
    Arc::new(db)
}

//! Database connection and initialization.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};

use crate::config::Config;

mod schema;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool described by `config`.
    ///
    /// Tables are not touched; call [`Database::ensure_schema`] to create
    /// missing ones.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .connect_timeout(config.database_connect_timeout)
            .acquire_timeout(config.database_connect_timeout)
            .sqlx_logging(config.database_sql_logging);

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!(
            max_connections = config.database_max_connections,
            "Database connected"
        );

        Ok(Self { connection })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Create every missing table from the entity definitions.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        schema::create_tables(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Database;
    use crate::config::Config;

    /// Private in-memory SQLite database with every table created.
    pub(crate) async fn memory_database() -> Database {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            database_min_connections: 1,
            ..Config::default()
        };
        let db = Database::connect(&config).await.unwrap();
        db.ensure_schema().await.unwrap();
        db
    }
}

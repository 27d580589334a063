//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_DB_CONNECT_TIMEOUT_SECS, DEFAULT_DB_MAX_CONNECTIONS,
    DEFAULT_DB_MIN_CONNECTIONS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    pub database_connect_timeout: Duration,
    pub database_sql_logging: bool,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("database_min_connections", &self.database_min_connections)
            .field("database_connect_timeout", &self.database_connect_timeout)
            .field("database_sql_logging", &self.database_sql_logging)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            database_min_connections: DEFAULT_DB_MIN_CONNECTIONS,
            database_connect_timeout: Duration::from_secs(DEFAULT_DB_CONNECT_TIMEOUT_SECS),
            database_sql_logging: false,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults in
    /// [`crate::config`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: parse_env("DATABASE_MAX_CONNECTIONS")
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            database_min_connections: parse_env("DATABASE_MIN_CONNECTIONS")
                .unwrap_or(DEFAULT_DB_MIN_CONNECTIONS),
            database_connect_timeout: Duration::from_secs(
                parse_env("DATABASE_CONNECT_TIMEOUT_SECS")
                    .unwrap_or(DEFAULT_DB_CONNECT_TIMEOUT_SECS),
            ),
            database_sql_logging: env::var("DATABASE_SQL_LOGGING")
                .ok()
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_env("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_database_url() {
        let config = Config {
            database_url: "postgres://admin:secret@db/employees".to_string(),
            ..Config::default()
        };

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn server_addr_joins_host_and_port() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 9090,
            ..Config::default()
        };

        assert_eq!(config.server_addr(), "127.0.0.1:9090");
    }
}

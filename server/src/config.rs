//! Server configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8888";
pub const DEFAULT_DATABASE_PATH: &str = "./todo.sqlite";

/// Value of `TODO_DATABASE_PATH` that selects an in-memory database.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TODO_LISTEN_ADDR {value:?}: {source}")]
    ListenAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Database {
    File(PathBuf),
    InMemory,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to
    pub listen_addr: SocketAddr,

    /// Where the `todos` table lives
    pub database: Database,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("TODO_LISTEN_ADDR").ok(),
            env::var("TODO_DATABASE_PATH").ok(),
        )
    }

    fn from_vars(
        listen_addr: Option<String>,
        database_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let listen_addr = listen_addr.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::ListenAddr {
                value: listen_addr.clone(),
                source,
            })?;

        let database = match database_path.as_deref() {
            Some(IN_MEMORY) => Database::InMemory,
            Some(path) => Database::File(PathBuf::from(path)),
            None => Database::File(PathBuf::from(DEFAULT_DATABASE_PATH)),
        };

        Ok(Self {
            listen_addr,
            database,
        })
    }
}

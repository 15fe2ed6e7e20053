//! Todo REST server: SQLite storage, resource handler, and axum routes.
//!
//! Layers, leaf first: `store` (gateway over the `todos` table), `handler`
//! (the five operations and their error taxonomy), `api` (HTTP mapping).

pub mod api;
pub mod config;
pub mod handler;
pub mod store;

use std::sync::Arc;

use tokio::net::TcpListener;

pub use api::{app, router};
pub use config::{Database, ServerConfig};
pub use handler::{TodoError, TodoHandler};
pub use store::{SqliteStore, StoreError, TodoGateway};

/// Open the store described by `database`, creating the schema if needed.
pub fn open_store(database: &Database) -> Result<Arc<dyn TodoGateway>, StoreError> {
    let store = match database {
        Database::File(path) => SqliteStore::open(path)?,
        Database::InMemory => SqliteStore::open_in_memory()?,
    };
    Ok(Arc::new(store))
}

pub async fn run(listener: TcpListener, store: Arc<dyn TodoGateway>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

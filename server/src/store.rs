//! Storage gateway over the `todos` table.
//!
//! # Design
//! The handler only sees the `TodoGateway` trait. `SqliteStore` is the real
//! implementation: one `rusqlite::Connection` behind a `Mutex`, which also
//! serializes every statement against the database.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;
use todo_core::Todo;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS todos (
    id TEXT PRIMARY KEY,
    content TEXT NOT NULL,
    done INTEGER NOT NULL DEFAULT 0
);";

const INSERT_SQL: &str = "INSERT INTO todos (id, content, done) VALUES (?1, ?2, ?3)";
const SELECT_ONE_SQL: &str = "SELECT id, content, done FROM todos WHERE id = ?1";
const SELECT_ALL_SQL: &str = "SELECT id, content, done FROM todos ORDER BY rowid";
const UPDATE_SQL: &str = "UPDATE todos SET content = ?1, done = ?2 WHERE id = ?3";
const DELETE_SQL: &str = "DELETE FROM todos WHERE id = ?1";

/// Target for per-statement events; filter with `RUST_LOG=todo_server::sql=debug`.
const SQL_TARGET: &str = "todo_server::sql";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("store connection lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Insert/select/update/delete primitives keyed by todo id.
///
/// `update` and `delete` report rows affected; deciding what zero means is
/// left to the caller.
pub trait TodoGateway: Send + Sync {
    fn insert(&self, todo: &Todo) -> StoreResult<()>;
    fn select(&self, id: &str) -> StoreResult<Option<Todo>>;
    fn select_all(&self) -> StoreResult<Vec<Todo>>;
    fn update(&self, todo: &Todo) -> StoreResult<usize>;
    fn delete(&self, id: &str) -> StoreResult<usize>;
}

/// SQLite-backed gateway with a single shared connection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database file and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening sqlite store");
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        tracing::debug!("opening in-memory sqlite store");
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(CREATE_TABLE_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl TodoGateway for SqliteStore {
    fn insert(&self, todo: &Todo) -> StoreResult<()> {
        tracing::debug!(
            target: SQL_TARGET,
            sql = INSERT_SQL,
            id = %todo.id,
            content = %todo.content,
            done = todo.done
        );
        self.conn()?
            .execute(INSERT_SQL, params![todo.id, todo.content, todo.done])?;
        Ok(())
    }

    fn select(&self, id: &str) -> StoreResult<Option<Todo>> {
        tracing::debug!(target: SQL_TARGET, sql = SELECT_ONE_SQL, %id);
        let conn = self.conn()?;
        let todo = conn
            .query_row(SELECT_ONE_SQL, params![id], map_todo_row)
            .optional()?;
        Ok(todo)
    }

    fn select_all(&self) -> StoreResult<Vec<Todo>> {
        tracing::debug!(target: SQL_TARGET, sql = SELECT_ALL_SQL);
        let conn = self.conn()?;
        let mut stmt = conn.prepare(SELECT_ALL_SQL)?;
        let rows = stmt.query_map([], map_todo_row)?;
        let todos = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    fn update(&self, todo: &Todo) -> StoreResult<usize> {
        tracing::debug!(
            target: SQL_TARGET,
            sql = UPDATE_SQL,
            id = %todo.id,
            content = %todo.content,
            done = todo.done
        );
        let changed = self
            .conn()?
            .execute(UPDATE_SQL, params![todo.content, todo.done, todo.id])?;
        tracing::debug!(target: SQL_TARGET, rows = changed, "update applied");
        Ok(changed)
    }

    fn delete(&self, id: &str) -> StoreResult<usize> {
        tracing::debug!(target: SQL_TARGET, sql = DELETE_SQL, %id);
        let changed = self.conn()?.execute(DELETE_SQL, params![id])?;
        tracing::debug!(target: SQL_TARGET, rows = changed, "delete applied");
        Ok(changed)
    }
}

fn map_todo_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        content: row.get(1)?,
        done: row.get(2)?,
    })
}

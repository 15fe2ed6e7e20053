//! The five todo operations on top of a `TodoGateway`.
//!
//! Every store failure is classified before it leaves this module: a missing
//! row (or a write that touched zero rows) is `NotFound`, anything else is
//! `Persistence`.

use std::sync::Arc;

use thiserror::Error;
use todo_core::{NewTodo, Todo, TodoPatch};
use uuid::Uuid;

use crate::store::{StoreError, TodoGateway};

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("todo not found: {0}")]
    NotFound(String),

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),
}

pub type TodoResult<T> = Result<T, TodoError>;

/// Resource handler for todos. Holds the injected store handle.
#[derive(Clone)]
pub struct TodoHandler {
    store: Arc<dyn TodoGateway>,
}

impl TodoHandler {
    pub fn new(store: Arc<dyn TodoGateway>) -> Self {
        Self { store }
    }

    /// Insert a new todo under a freshly generated id.
    pub fn create(&self, input: NewTodo) -> TodoResult<Todo> {
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            content: input.content,
            done: input.done,
        };
        self.store.insert(&todo).inspect_err(|err| {
            tracing::error!(id = %todo.id, error = %err, "insert failed");
        })?;
        tracing::debug!(id = %todo.id, "todo created");
        Ok(todo)
    }

    pub fn read(&self, id: &str) -> TodoResult<Todo> {
        self.store
            .select(id)?
            .ok_or_else(|| not_found(id))
    }

    pub fn list(&self) -> TodoResult<Vec<Todo>> {
        let todos = self.store.select_all()?;
        tracing::debug!(count = todos.len(), "todos listed");
        Ok(todos)
    }

    /// Merge `patch` onto the stored record and write it back.
    ///
    /// The record must exist before anything is written. A write that
    /// affects zero rows (deleted in between) is also `NotFound`.
    pub fn update(&self, id: &str, patch: TodoPatch) -> TodoResult<Todo> {
        let mut todo = self.store.select(id)?.ok_or_else(|| not_found(id))?;
        patch.apply(&mut todo);

        if self.store.update(&todo)? == 0 {
            return Err(not_found(id));
        }
        tracing::debug!(%id, done = todo.done, "todo updated");
        Ok(todo)
    }

    pub fn delete(&self, id: &str) -> TodoResult<()> {
        if self.store.delete(id)? == 0 {
            return Err(not_found(id));
        }
        tracing::debug!(%id, "todo deleted");
        Ok(())
    }
}

fn not_found(id: &str) -> TodoError {
    tracing::warn!(%id, "todo not found");
    TodoError::NotFound(id.to_string())
}

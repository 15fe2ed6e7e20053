//! HTTP surface: routes, JSON bodies, and error-to-status mapping.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use todo_core::{ErrorBody, NewTodo, Todo, TodoPatch};
use tower_http::trace::TraceLayer;

use crate::handler::{TodoError, TodoHandler};
use crate::store::TodoGateway;

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = match &self {
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::Validation(_) => StatusCode::BAD_REQUEST,
            TodoError::Persistence(err) => {
                tracing::error!(error = %err, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(handler: TodoHandler) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(read_todo).patch(update_todo).delete(delete_todo),
        )
        .fallback(no_route)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(handler)
}

/// Router over an already-opened store.
pub fn app(store: Arc<dyn TodoGateway>) -> Router {
    router(TodoHandler::new(store))
}

fn validate<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, TodoError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| TodoError::Validation(rejection.body_text()))
}

async fn no_route(uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    let body = ErrorBody {
        message: format!("no route for {}", uri.path()),
    };
    (StatusCode::NOT_FOUND, Json(body))
}

async fn method_not_allowed(method: Method, uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    let body = ErrorBody {
        message: format!("method {method} not allowed on {}", uri.path()),
    };
    (StatusCode::METHOD_NOT_ALLOWED, Json(body))
}

async fn list_todos(State(handler): State<TodoHandler>) -> Result<Json<Vec<Todo>>, TodoError> {
    handler.list().map(Json)
}

async fn create_todo(
    State(handler): State<TodoHandler>,
    payload: Result<Json<NewTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let input = validate(payload)?;
    let todo = handler.create(input)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn read_todo(
    State(handler): State<TodoHandler>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, TodoError> {
    handler.read(&id).map(Json)
}

async fn update_todo(
    State(handler): State<TodoHandler>,
    Path(id): Path<String>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<Todo>, TodoError> {
    let patch = validate(payload)?;
    handler.update(&id, patch).map(Json)
}

async fn delete_todo(
    State(handler): State<TodoHandler>,
    Path(id): Path<String>,
) -> Result<StatusCode, TodoError> {
    handler.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn not_found_maps_to_404() {
        let resp = TodoError::NotFound("abc".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let resp = TodoError::Validation("missing field `content`".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn persistence_maps_to_500_with_message() {
        let resp = TodoError::Persistence(StoreError::Poisoned).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert!(!body.message.is_empty());
        assert!(body.message.contains("lock poisoned"), "{}", body.message);
    }
}

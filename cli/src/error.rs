use thiserror::Error;
use todo_core::ApiError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("transport error: {0}")]
    Transport(String),

    /// Rejected locally, before any request is sent.
    #[error("{0}")]
    Validation(String),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("output error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

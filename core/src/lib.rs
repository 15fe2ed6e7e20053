//! Shared types and sans-IO API client for the todo service.
//!
//! # Overview
//! Holds the wire DTOs used by both the server and the CLI, and a
//! `TodoClient` that builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network. The caller executes the actual HTTP
//! round trip.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Partial updates are typed: `TodoPatch` fields are `Field<T>`.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ErrorBody, Field, NewTodo, Todo, TodoPatch};

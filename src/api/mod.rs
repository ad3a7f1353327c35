//! Remote Todo API
//!
//! Abstract interface to the todo backend, plus its HTTP implementation.
//! The sync layer only sees the trait, so tests can swap in a fake.

mod http;

use async_trait::async_trait;

use crate::models::{NewTodo, Todo, TodoId, TodoPatch, UserId};

pub use http::HttpTodoApi;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("todo {0} already has a request in flight")]
    Busy(TodoId),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// CRUD operations against the todo backend
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// List all todos owned by `user_id`
    async fn list(&self, user_id: UserId) -> ApiResult<Vec<Todo>>;

    /// Create a todo; the backend assigns the id
    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo>;

    /// Apply a partial update and return the stored todo
    async fn update(&self, id: TodoId, patch: &TodoPatch) -> ApiResult<Todo>;

    /// Delete a todo by id
    async fn delete(&self, id: TodoId) -> ApiResult<()>;
}

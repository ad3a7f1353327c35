//! HTTP Todo API
//!
//! `reqwest` client for the REST-like todo backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, TodoApi};
use crate::models::{NewTodo, Todo, TodoId, TodoPatch, UserId};

#[derive(Clone, Debug)]
pub struct HttpTodoApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn todo_url(&self, id: TodoId) -> String {
        self.url(&format!("/todos/{}", id))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Turn non-2xx responses into `ApiError::Status`
fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let response = check_status(response)?;
    let body = response.text().await?;
    decode(&body)
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self, user_id: UserId) -> ApiResult<Vec<Todo>> {
        let response = self
            .client
            .get(self.url("/todos"))
            .query(&[("userId", user_id)])
            .send()
            .await?;
        read_json(response).await
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let response = self.client.post(self.url("/todos")).json(todo).send().await?;
        read_json(response).await
    }

    async fn update(&self, id: TodoId, patch: &TodoPatch) -> ApiResult<Todo> {
        let response = self.client.patch(self.todo_url(id)).json(patch).send().await?;
        read_json(response).await
    }

    async fn delete(&self, id: TodoId) -> ApiResult<()> {
        let response = self.client.delete(self.todo_url(id)).send().await?;
        check_status(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let api = HttpTodoApi::new("https://example.test/api/");
        assert_eq!(api.url("/todos"), "https://example.test/api/todos");
        assert_eq!(api.todo_url(12), "https://example.test/api/todos/12");
    }

    fn response(status: u16, body: &str) -> reqwest::Response {
        let response = http::Response::builder()
            .status(status)
            .body(body.to_string())
            .unwrap();
        reqwest::Response::from(response)
    }

    #[test]
    fn test_non_success_status_is_status_error() {
        let err = check_status(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));

        let err = check_status(response(500, "oops")).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));

        assert!(check_status(response(201, "{}")).is_ok());
    }

    #[test]
    fn test_bad_body_is_decode_error() {
        let err = decode::<Todo>(r#"{"id":"seven"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let todo: Todo = decode(r#"{"id":7,"userId":1,"title":"a","completed":false}"#).unwrap();
        assert_eq!(todo.id, 7);
    }

    #[tokio::test]
    async fn test_read_json_maps_status_and_body() {
        let todos: Vec<Todo> = read_json(response(200, "[]")).await.unwrap();
        assert!(todos.is_empty());

        let err = read_json::<Todo>(response(200, "<html>")).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = read_json::<Todo>(response(503, "[]")).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_unsendable_request_is_transport_error() {
        let api = HttpTodoApi::new("not a url");
        let err = api.delete(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { status: 404, url: "https://example.test/todos/1".to_string() };
        assert_eq!(err.to_string(), "unexpected status 404 from https://example.test/todos/1");
    }
}

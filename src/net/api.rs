//! REST API client for boards, columns, tasks, and auth.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call resolves to
//! `ApiError::Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call is a fresh request with no retry and no cache. Non-2xx responses
//! become `ApiError::Http` carrying the server's `message`, so callers can
//! surface it verbatim or log it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AuthResponse, Board, BoardPatch, Column, ColumnPatch, CreateBoardRequest, CreateColumnRequest,
    CreateTaskRequest, LoginRequest, MoveTaskRequest, RegisterRequest, Task, TaskPatch,
};
use crate::config::ClientConfig;

/// HTTP verbs used by the board API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

fn login_endpoint() -> String {
    "/auth/login".to_owned()
}

fn register_endpoint() -> String {
    "/auth/register".to_owned()
}

fn boards_endpoint() -> String {
    "/boards".to_owned()
}

fn board_endpoint(board_id: &str) -> String {
    format!("/boards/{board_id}")
}

fn columns_endpoint(board_id: &str) -> String {
    format!("/boards/{board_id}/columns")
}

fn column_endpoint(board_id: &str, column_id: &str) -> String {
    format!("/boards/{board_id}/columns/{column_id}")
}

fn tasks_endpoint(board_id: &str, column_id: &str) -> String {
    format!("/boards/{board_id}/columns/{column_id}/tasks")
}

fn task_endpoint(board_id: &str, column_id: &str, task_id: &str) -> String {
    format!("/boards/{board_id}/columns/{column_id}/tasks/{task_id}")
}

fn task_move_endpoint(board_id: &str, column_id: &str, task_id: &str) -> String {
    format!("/boards/{board_id}/columns/{column_id}/tasks/{task_id}/move")
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn encode_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Stateless REST client. Cheap to clone; one instance is provided as context.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // ---------------------------------------------------------------------
    // Auth
    // ---------------------------------------------------------------------

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure; a 401 carries the server message.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = encode_body(&LoginRequest { email: email.to_owned(), password: password.to_owned() })?;
        self.fetch_json(HttpMethod::Post, &login_endpoint(), Some(body)).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body = encode_body(request)?;
        self.fetch_json(HttpMethod::Post, &register_endpoint(), Some(body)).await
    }

    // ---------------------------------------------------------------------
    // Boards
    // ---------------------------------------------------------------------

    /// `GET /boards`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn list_boards(&self) -> Result<Vec<Board>, ApiError> {
        self.fetch_json(HttpMethod::Get, &boards_endpoint(), None).await
    }

    /// `GET /boards/:id` with nested columns and tasks.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn get_board(&self, board_id: &str) -> Result<Board, ApiError> {
        self.fetch_json(HttpMethod::Get, &board_endpoint(board_id), None).await
    }

    /// `POST /boards`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn create_board(&self, name: &str, description: Option<&str>) -> Result<Board, ApiError> {
        let body = encode_body(&CreateBoardRequest {
            name: name.to_owned(),
            description: description.map(str::to_owned),
        })?;
        self.fetch_json(HttpMethod::Post, &boards_endpoint(), Some(body)).await
    }

    /// `PATCH /boards/:id`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn update_board(&self, board_id: &str, patch: &BoardPatch) -> Result<Board, ApiError> {
        let body = encode_body(patch)?;
        self.fetch_json(HttpMethod::Patch, &board_endpoint(board_id), Some(body)).await
    }

    /// `DELETE /boards/:id`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn delete_board(&self, board_id: &str) -> Result<(), ApiError> {
        self.fetch_empty(HttpMethod::Delete, &board_endpoint(board_id), None).await
    }

    // ---------------------------------------------------------------------
    // Columns
    // ---------------------------------------------------------------------

    /// `POST /boards/:boardId/columns`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn create_column(&self, board_id: &str, name: &str, position: i32) -> Result<Column, ApiError> {
        let body = encode_body(&CreateColumnRequest { name: name.to_owned(), position })?;
        self.fetch_json(HttpMethod::Post, &columns_endpoint(board_id), Some(body)).await
    }

    /// `PATCH /boards/:boardId/columns/:columnId`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn update_column(
        &self,
        board_id: &str,
        column_id: &str,
        patch: &ColumnPatch,
    ) -> Result<Column, ApiError> {
        let body = encode_body(patch)?;
        self.fetch_json(HttpMethod::Patch, &column_endpoint(board_id, column_id), Some(body)).await
    }

    /// `DELETE /boards/:boardId/columns/:columnId`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn delete_column(&self, board_id: &str, column_id: &str) -> Result<(), ApiError> {
        self.fetch_empty(HttpMethod::Delete, &column_endpoint(board_id, column_id), None).await
    }

    // ---------------------------------------------------------------------
    // Tasks
    // ---------------------------------------------------------------------

    /// `POST /boards/:boardId/columns/:columnId/tasks`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn create_task(
        &self,
        board_id: &str,
        column_id: &str,
        request: &CreateTaskRequest,
    ) -> Result<Task, ApiError> {
        let body = encode_body(request)?;
        self.fetch_json(HttpMethod::Post, &tasks_endpoint(board_id, column_id), Some(body)).await
    }

    /// `PATCH /boards/:boardId/columns/:columnId/tasks/:taskId`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn update_task(
        &self,
        board_id: &str,
        column_id: &str,
        task_id: &str,
        patch: &TaskPatch,
    ) -> Result<Task, ApiError> {
        let body = encode_body(patch)?;
        self.fetch_json(HttpMethod::Patch, &task_endpoint(board_id, column_id, task_id), Some(body))
            .await
    }

    /// `PATCH /boards/:boardId/columns/:columnId/tasks/:taskId/move`.
    ///
    /// `column_id` is the task's current (source) column.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn move_task(
        &self,
        board_id: &str,
        column_id: &str,
        task_id: &str,
        request: &MoveTaskRequest,
    ) -> Result<Task, ApiError> {
        let body = encode_body(request)?;
        self.fetch_json(HttpMethod::Patch, &task_move_endpoint(board_id, column_id, task_id), Some(body))
            .await
    }

    /// `DELETE /boards/:boardId/columns/:columnId/tasks/:taskId`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure.
    pub async fn delete_task(&self, board_id: &str, column_id: &str, task_id: &str) -> Result<(), ApiError> {
        self.fetch_empty(HttpMethod::Delete, &task_endpoint(board_id, column_id, task_id), None).await
    }

    // ---------------------------------------------------------------------
    // Transport
    // ---------------------------------------------------------------------

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.send(method, path, body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_empty(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            self.send(method, path, body).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "csr")]
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        use crate::config::TOKEN_STORAGE_KEY;
        use crate::util::token_store::{BrowserTokenStore, TokenStore as _};

        let url = self.url(path);
        let mut builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        if let Some(token) = BrowserTokenStore::new(TOKEN_STORAGE_KEY).load() {
            builder = builder.header("Authorization", &bearer_header(&token));
        }
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            log::warn!("{method:?} {path} failed with status {status}");
            return Err(ApiError::from_response(status, &text));
        }
        Ok(resp)
    }
}

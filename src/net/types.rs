//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON bodies of the board API (camelCase fields) so
//! responses deserialize without adapters and request payloads serialize to
//! exactly what the server expects.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A kanban board with its nested columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Server-assigned board identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Columns in left-to-right order.
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Creation timestamp (ISO 8601, opaque to the client).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO 8601, opaque to the client).
    #[serde(default)]
    pub updated_at: String,
}

impl Board {
    /// Total number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(|col| col.tasks.len()).sum()
    }
}

/// An ordered lane within a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub name: String,
    /// Zero-based rank among the board's columns.
    pub position: i32,
    pub board_id: String,
    /// Tasks in top-to-bottom order.
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A card placed in exactly one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Zero-based rank among the column's tasks.
    pub position: i32,
    pub column_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// An authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// "First Last", falling back to the email when both names are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }
}

/// Response body of `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// `POST /boards` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateBoardRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `PATCH /boards/:id` body. Unset fields are left untouched server-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BoardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `POST /boards/:boardId/columns` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateColumnRequest {
    pub name: String,
    pub position: i32,
}

/// `PATCH /boards/:boardId/columns/:columnId` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ColumnPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

/// `POST /boards/:boardId/columns/:columnId/tasks` body.
///
/// `description` is always sent; a blank form field becomes `""`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub position: i32,
}

/// `PATCH .../tasks/:taskId` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

/// `PATCH .../tasks/:taskId/move` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskRequest {
    pub new_column_id: String,
    pub new_position: i32,
}

/// Convert a list length or index into a wire position, saturating at `i32::MAX`.
#[must_use]
pub fn position_from_index(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

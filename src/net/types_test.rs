use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_task(id: &str, column_id: &str, position: i32) -> Task {
    Task {
        id: id.to_owned(),
        title: format!("Task {id}"),
        description: None,
        position,
        column_id: column_id.to_owned(),
        created_at: String::new(),
        updated_at: String::new(),
    }
}

fn make_column(id: &str, tasks: Vec<Task>) -> Column {
    Column {
        id: id.to_owned(),
        name: id.to_uppercase(),
        position: 0,
        board_id: "b-1".to_owned(),
        tasks,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn board_deserializes_nested_camel_case_payload() {
    let json = serde_json::json!({
        "id": "b-1",
        "name": "Sprint 1",
        "description": "Q3 work",
        "createdAt": "2024-05-01T10:00:00.000Z",
        "updatedAt": "2024-05-02T10:00:00.000Z",
        "columns": [{
            "id": "c-1",
            "name": "To Do",
            "position": 0,
            "boardId": "b-1",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-01T10:00:00.000Z",
            "tasks": [{
                "id": "t-1",
                "title": "Write docs",
                "position": 0,
                "columnId": "c-1",
                "createdAt": "2024-05-01T10:00:00.000Z",
                "updatedAt": "2024-05-01T10:00:00.000Z"
            }]
        }]
    });
    let board: Board = serde_json::from_value(json).unwrap();
    assert_eq!(board.name, "Sprint 1");
    assert_eq!(board.description.as_deref(), Some("Q3 work"));
    assert_eq!(board.columns.len(), 1);
    assert_eq!(board.columns[0].board_id, "b-1");
    assert_eq!(board.columns[0].tasks[0].column_id, "c-1");
    assert_eq!(board.columns[0].tasks[0].description, None);
    assert_eq!(board.created_at, "2024-05-01T10:00:00.000Z");
}

#[test]
fn board_without_columns_or_timestamps_defaults_to_empty() {
    let board: Board = serde_json::from_value(serde_json::json!({
        "id": "b-2",
        "name": "Fresh"
    }))
    .unwrap();
    assert!(board.columns.is_empty());
    assert!(board.description.is_none());
    assert!(board.created_at.is_empty());
    assert!(board.updated_at.is_empty());
}

#[test]
fn column_without_tasks_defaults_to_empty_list() {
    let column: Column = serde_json::from_value(serde_json::json!({
        "id": "c-9",
        "name": "Done",
        "position": 2,
        "boardId": "b-1"
    }))
    .unwrap();
    assert!(column.tasks.is_empty());
    assert_eq!(column.position, 2);
}

#[test]
fn auth_response_uses_snake_case_token_and_camel_case_user() {
    let response: AuthResponse = serde_json::from_value(serde_json::json!({
        "access_token": "jwt.abc.def",
        "user": {
            "id": "u-1",
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace"
        }
    }))
    .unwrap();
    assert_eq!(response.access_token, "jwt.abc.def");
    assert_eq!(response.user.first_name, "Ada");
    assert_eq!(response.user.last_name, "Lovelace");
}

// =============================================================
// Request encoding
// =============================================================

#[test]
fn register_request_serializes_camel_case_names() {
    let body = RegisterRequest {
        email: "ada@example.com".to_owned(),
        password: "secret".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "email": "ada@example.com",
            "password": "secret",
            "firstName": "Ada",
            "lastName": "Lovelace"
        })
    );
}

#[test]
fn create_board_request_omits_missing_description() {
    let body = CreateBoardRequest { name: "Sprint 1".to_owned(), description: None };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "name": "Sprint 1" }));
}

#[test]
fn create_task_request_always_sends_description() {
    let body = CreateTaskRequest { title: "Ship".to_owned(), description: String::new(), position: 3 };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "title": "Ship", "description": "", "position": 3 })
    );
}

#[test]
fn move_task_request_serializes_camel_case() {
    let body = MoveTaskRequest { new_column_id: "c-2".to_owned(), new_position: 0 };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "newColumnId": "c-2", "newPosition": 0 })
    );
}

#[test]
fn patches_only_serialize_set_fields() {
    let board = BoardPatch { name: Some("Renamed".to_owned()), description: None };
    assert_eq!(serde_json::to_value(&board).unwrap(), serde_json::json!({ "name": "Renamed" }));

    let column = ColumnPatch { name: None, position: Some(4) };
    assert_eq!(serde_json::to_value(&column).unwrap(), serde_json::json!({ "position": 4 }));

    assert_eq!(serde_json::to_value(TaskPatch::default()).unwrap(), serde_json::json!({}));
}

// =============================================================
// Helpers on domain types
// =============================================================

#[test]
fn total_tasks_sums_every_column() {
    let board = Board {
        id: "b-1".to_owned(),
        name: "Board".to_owned(),
        description: None,
        columns: vec![
            make_column("a", vec![make_task("t1", "a", 0), make_task("t2", "a", 1)]),
            make_column("b", vec![]),
            make_column("c", vec![make_task("t3", "c", 0)]),
        ],
        created_at: String::new(),
        updated_at: String::new(),
    };
    assert_eq!(board.total_tasks(), 3);
}

#[test]
fn display_name_prefers_full_name() {
    let user = User {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    };
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_email() {
    let user = User {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: " ".to_owned(),
        last_name: String::new(),
    };
    assert_eq!(user.display_name(), "ada@example.com");
}

#[test]
fn position_from_index_saturates() {
    assert_eq!(position_from_index(0), 0);
    assert_eq!(position_from_index(7), 7);
    assert_eq!(position_from_index(usize::MAX), i32::MAX);
}

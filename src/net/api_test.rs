use super::*;

#[test]
fn auth_endpoints_format_expected_paths() {
    assert_eq!(login_endpoint(), "/auth/login");
    assert_eq!(register_endpoint(), "/auth/register");
}

#[test]
fn board_endpoints_format_expected_paths() {
    assert_eq!(boards_endpoint(), "/boards");
    assert_eq!(board_endpoint("b1"), "/boards/b1");
}

#[test]
fn column_endpoints_nest_under_board() {
    assert_eq!(columns_endpoint("b1"), "/boards/b1/columns");
    assert_eq!(column_endpoint("b1", "c2"), "/boards/b1/columns/c2");
}

#[test]
fn task_endpoints_nest_under_column() {
    assert_eq!(tasks_endpoint("b1", "c2"), "/boards/b1/columns/c2/tasks");
    assert_eq!(task_endpoint("b1", "c2", "t3"), "/boards/b1/columns/c2/tasks/t3");
    assert_eq!(task_move_endpoint("b1", "c2", "t3"), "/boards/b1/columns/c2/tasks/t3/move");
}

#[test]
fn url_joins_base_and_path() {
    let client = ApiClient::new(&ClientConfig::new("https://kanban.example.com/api/"));
    assert_eq!(client.url("/boards/b1"), "https://kanban.example.com/api/boards/b1");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn encode_body_produces_json_object() {
    let body = encode_body(&MoveTaskRequest { new_column_id: "c-9".to_owned(), new_position: 2 }).unwrap();
    assert_eq!(body, serde_json::json!({ "newColumnId": "c-9", "newPosition": 2 }));
}

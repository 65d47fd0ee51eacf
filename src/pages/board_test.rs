use super::*;
use crate::net::types::{Board, Task};

fn loaded_board() -> BoardState {
    let board: Board = serde_json::from_value(serde_json::json!({
        "id": "b1",
        "name": "Sprint",
        "columns": [
            { "id": "todo", "name": "To Do", "position": 0, "boardId": "b1", "tasks": [
                { "id": "t1", "title": "one", "position": 0, "columnId": "todo" },
                { "id": "t2", "title": "two", "position": 1, "columnId": "todo" }
            ]},
            { "id": "done", "name": "Done", "position": 1, "boardId": "b1", "tasks": [] }
        ]
    }))
    .unwrap();
    let mut state = BoardState::default();
    state.begin_load("b1");
    state.finish_load(board);
    state
}

// =============================================================================
// new_task_request
// =============================================================================

#[test]
fn new_task_request_trims_and_keeps_blank_description_empty() {
    assert_eq!(
        new_task_request("  Write docs ", "   ", 2),
        Ok(CreateTaskRequest { title: "Write docs".to_owned(), description: String::new(), position: 2 })
    );
}

#[test]
fn new_task_request_requires_title() {
    assert_eq!(new_task_request(" ", "details", 0), Err(FormError::Required("Title")));
}

#[test]
fn new_task_request_uses_current_task_count_as_position() {
    let state = loaded_board();
    let position = state.next_task_position("todo").unwrap();
    let request = new_task_request("three", "", position).unwrap();
    assert_eq!(request.position, 2);

    let position = state.next_task_position("done").unwrap();
    assert_eq!(new_task_request("first", "", position).unwrap().position, 0);
}

// =============================================================================
// rename_patch
// =============================================================================

#[test]
fn rename_patch_sends_only_the_name() {
    let patch = rename_patch("Sprint", " Sprint 2 ").unwrap().unwrap();
    assert_eq!(patch.name.as_deref(), Some("Sprint 2"));
    assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "name": "Sprint 2" }));
}

#[test]
fn rename_patch_skips_unchanged_name() {
    assert_eq!(rename_patch("Sprint", "  Sprint "), Ok(None));
}

#[test]
fn rename_patch_rejects_blank_name() {
    assert_eq!(rename_patch("Sprint", "  "), Err(FormError::Required("Board name")));
}

// =============================================================================
// Drop handling as wired by the page
// =============================================================================

#[test]
fn cross_column_drop_yields_move_request_for_target_index() {
    let mut state = loaded_board();
    assert!(state.begin_drag("todo", 0));

    let DropEffect::Moved(pending) = state.drop_task("done", 0) else {
        panic!("expected a cross-column move");
    };
    assert_eq!(pending.board_id, "b1");
    assert_eq!(pending.source_column_id, "todo");
    assert_eq!(pending.task_id, "t1");
    assert_eq!(
        serde_json::to_value(pending.request()).unwrap(),
        serde_json::json!({ "newColumnId": "done", "newPosition": 0 })
    );

    let done: Vec<&str> = state.column("done").unwrap().tasks.iter().map(|t: &Task| t.id.as_str()).collect();
    assert_eq!(done, ["t1"]);
}

#[test]
fn rejected_move_restores_both_columns() {
    let mut state = loaded_board();
    let before = state.board.clone();
    assert!(state.begin_drag("todo", 0));
    let DropEffect::Moved(pending) = state.drop_task("done", 0) else {
        panic!("expected a cross-column move");
    };

    assert!(state.rollback_move(&pending));
    assert_eq!(state.board, before);
}

// =============================================================================
// Server completions
// =============================================================================

fn rejected() -> ApiError {
    ApiError::from_response(500, r#"{"message":"boom"}"#)
}

fn moved_t1(state: &mut BoardState) -> PendingMove {
    assert!(state.begin_drag("todo", 0));
    let DropEffect::Moved(pending) = state.drop_task("done", 0) else {
        panic!("expected a cross-column move");
    };
    pending
}

fn ids(state: &BoardState, column_id: &str) -> Vec<String> {
    state.column(column_id).map(|c| c.tasks.iter().map(|t| t.id.clone()).collect()).unwrap_or_default()
}

#[test]
fn accepted_move_keeps_optimistic_state() {
    let mut state = loaded_board();
    let pending = moved_t1(&mut state);
    let confirmed = state.column("done").unwrap().tasks[0].clone();

    assert!(!apply_move_result(&mut state, &pending, &Ok(confirmed)));
    assert_eq!(ids(&state, "todo"), ["t2"]);
    assert_eq!(ids(&state, "done"), ["t1"]);
}

#[test]
fn rejected_move_result_restores_pre_image() {
    let mut state = loaded_board();
    let before = state.board.clone();
    let pending = moved_t1(&mut state);

    assert!(apply_move_result(&mut state, &pending, &Err(rejected())));
    assert_eq!(state.board, before);
}

#[test]
fn failed_task_delete_leaves_column_unchanged() {
    let mut state = loaded_board();
    assert!(!apply_task_delete(&mut state, "b1", "todo", "t1", &Err(rejected())));
    assert_eq!(ids(&state, "todo"), ["t1", "t2"]);
}

#[test]
fn successful_task_delete_removes_exactly_that_task() {
    let mut state = loaded_board();
    assert!(apply_task_delete(&mut state, "b1", "todo", "t1", &Ok(())));
    assert_eq!(ids(&state, "todo"), ["t2"]);
}

#[test]
fn column_delete_waits_for_server() {
    let mut state = loaded_board();
    assert!(!apply_column_delete(&mut state, "b1", "done", &Err(rejected())));
    assert!(state.column("done").is_some());

    assert!(apply_column_delete(&mut state, "b1", "done", &Ok(())));
    assert!(state.column("done").is_none());
}

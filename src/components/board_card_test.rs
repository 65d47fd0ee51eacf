use super::*;

fn board_with(columns: &[usize]) -> Board {
    let columns: Vec<serde_json::Value> = columns
        .iter()
        .enumerate()
        .map(|(ci, &count)| {
            let tasks: Vec<serde_json::Value> = (0..count)
                .map(|ti| serde_json::json!({ "id": format!("t{ci}-{ti}"), "title": "x", "position": ti, "columnId": format!("c{ci}") }))
                .collect();
            serde_json::json!({ "id": format!("c{ci}"), "name": "col", "position": ci, "boardId": "b1", "tasks": tasks })
        })
        .collect();
    serde_json::from_value(serde_json::json!({ "id": "b1", "name": "Board", "columns": columns })).unwrap()
}

#[test]
fn board_href_points_at_detail_route() {
    assert_eq!(board_href("b-42"), "/boards/b-42");
}

#[test]
fn board_summary_counts_columns_and_tasks_across_columns() {
    assert_eq!(board_summary(&board_with(&[2, 0, 3])), "3 columns · 5 tasks");
}

#[test]
fn board_summary_singular_and_empty() {
    assert_eq!(board_summary(&board_with(&[1])), "1 column · 1 task");
    assert_eq!(board_summary(&board_with(&[])), "0 columns · 0 tasks");
}

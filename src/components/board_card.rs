//! Reusable card component for board list items.
//!
//! DESIGN
//! ======
//! The card is a plain link to `/boards/:id`; the delete button stops the
//! click from reaching the link and hands the id to the page, which owns the
//! confirmation and the API call.

use leptos::prelude::*;

use crate::net::types::Board;

/// A clickable card summarizing one board.
#[component]
pub fn BoardCard(board: Board, #[prop(optional)] on_delete: Option<Callback<String>>) -> impl IntoView {
    let href = board_href(&board.id);
    let summary = board_summary(&board);
    let id = board.id.clone();
    let on_delete_click = Callback::new(move |()| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(id.clone());
        }
    });

    view! {
        <a class="board-card" href=href>
            <span class="board-card__name">{board.name}</span>
            {board.description.map(|d| view! { <span class="board-card__description">{d}</span> })}
            <span class="board-card__meta">{summary}</span>
            <Show when=move || on_delete.is_some()>
                <button
                    class="board-card__delete"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_delete_click.run(());
                    }
                    title="Delete board"
                    aria-label="Delete board"
                >
                    "✕"
                </button>
            </Show>
        </a>
    }
}

fn board_href(id: &str) -> String {
    format!("/boards/{id}")
}

/// "N columns · M tasks", pluralized.
fn board_summary(board: &Board) -> String {
    format!(
        "{} · {}",
        plural(board.columns.len(), "column", "columns"),
        plural(board.total_tasks(), "task", "tasks")
    )
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 { format!("1 {one}") } else { format!("{count} {many}") }
}

#[cfg(test)]
#[path = "board_card_test.rs"]
mod board_card_test;

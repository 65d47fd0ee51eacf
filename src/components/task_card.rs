//! Draggable task card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Uses native HTML5 drag events. `dragstart` records the source in
//! `BoardState`; a drop on the card targets the card's own index in its
//! column. `dragend` always fires after the gesture, so it only has to clear a
//! drag that no drop consumed.

use leptos::prelude::*;

use crate::net::types::Task;
use crate::state::board::BoardState;

/// A task card inside a column.
#[component]
pub fn TaskCard(
    task: Task,
    column_id: String,
    index: usize,
    /// Drop onto this card: receives the card's index.
    on_drop: Callback<usize>,
    /// Delete request: receives the task id.
    on_delete: Callback<String>,
) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let task_id = task.id.clone();
    let dragging_id = task.id.clone();
    let delete_id = task.id.clone();

    let on_dragstart = move |ev: leptos::ev::DragEvent| {
        let started = board.try_update(|s| s.begin_drag(&column_id, index)).unwrap_or(false);
        if !started {
            ev.prevent_default();
            return;
        }
        // Firefox refuses to start a drag without payload.
        #[cfg(feature = "csr")]
        {
            if let Some(transfer) = ev.data_transfer() {
                let _ = transfer.set_data("text/plain", &task_id);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &task_id;
        }
    };

    view! {
        <div
            class="task-card"
            class:task-card--dragging=move || board.with(|s| s.is_dragging(&dragging_id))
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=move |_| board.update(BoardState::cancel_drag)
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                on_drop.run(index);
            }
        >
            <div class="task-card__header">
                <span class="task-card__title">{task.title}</span>
                <button
                    class="task-card__delete"
                    title="Delete task"
                    aria-label="Delete task"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "✕"
                </button>
            </div>
            {task
                .description
                .filter(|d| !d.trim().is_empty())
                .map(|d| view! { <p class="task-card__description">{d}</p> })}
        </div>
    }
}

//! Column lane: header, task list, and the trailing drop area.
//!
//! DESIGN
//! ======
//! The column reads its own slice of `BoardState` through a memo, so a drag
//! that only touches `BoardState::drag` does not rebuild the task list under
//! the pointer. Dropping anywhere on the lane that is not a card targets the
//! end of the list.

use leptos::prelude::*;

use crate::components::task_card::TaskCard;
use crate::state::board::BoardState;

/// One column of the open board.
#[component]
pub fn BoardColumn(
    column_id: String,
    /// Drop into this column: receives `(column_id, target_index)`.
    on_drop: Callback<(String, usize)>,
    /// "Add task" request: receives the column id.
    on_add_task: Callback<String>,
    /// Delete request for a task: receives `(column_id, task_id)`.
    on_delete_task: Callback<(String, String)>,
    /// Delete request for this column: receives the column id.
    on_delete_column: Callback<String>,
) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let id = StoredValue::new(column_id);
    let column = Memo::new(move |_| board.with(|s| s.column(&id.get_value()).cloned()));

    let drop_at_end = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        let len = column.with_untracked(|c| c.as_ref().map_or(0, |c| c.tasks.len()));
        on_drop.run((id.get_value(), len));
    };

    let tasks = move || {
        let Some(column) = column.get() else {
            return Vec::new();
        };
        let column_id = column.id.clone();
        column
            .tasks
            .into_iter()
            .enumerate()
            .map(|(index, task)| {
                let drop_column = column_id.clone();
                let delete_column = column_id.clone();
                view! {
                    <TaskCard
                        task=task
                        column_id=column_id.clone()
                        index=index
                        on_drop=Callback::new(move |at: usize| on_drop.run((drop_column.clone(), at)))
                        on_delete=Callback::new(move |task_id: String| {
                            on_delete_task.run((delete_column.clone(), task_id));
                        })
                    />
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section
            class="board-column"
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=drop_at_end
        >
            <header class="board-column__header">
                <span class="board-column__name">{move || column.with(|c| c.as_ref().map(|c| c.name.clone()))}</span>
                <span class="board-column__count">
                    {move || column.with(|c| c.as_ref().map_or(0, |c| c.tasks.len()))}
                </span>
                <button
                    class="board-column__delete"
                    title="Delete column"
                    aria-label="Delete column"
                    on:click=move |_| on_delete_column.run(id.get_value())
                >
                    "✕"
                </button>
            </header>
            <div class="board-column__tasks">
                {tasks}
                <Show when=move || column.with(|c| c.as_ref().is_some_and(|c| c.tasks.is_empty()))>
                    <p class="board-column__empty">"Drop tasks here"</p>
                </Show>
            </div>
            <button class="btn board-column__add" on:click=move |_| on_add_task.run(id.get_value())>
                "+ Add Task"
            </button>
        </section>
    }
}

//! Board page: columns, tasks, and drag-and-drop between them.
//!
//! ARCHITECTURE
//! ============
//! This component is the route-level coordinator between the URL board id,
//! the REST API, and the `BoardState` held in context. Components render the
//! lanes and report gestures back through callbacks; every API call and every
//! completion is applied here.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route changes do not unmount this component, so the load effect tracks the
//! `id` param and a completion for a board the route has left is dropped.
//!
//! TRADE-OFFS
//! ==========
//! Cross-column moves are optimistic and rolled back on failure, while
//! creates and deletes wait for the server. Reordering within a column stays
//! local; the API has no endpoint that persists it without also moving.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::board_column::BoardColumn;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{BoardPatch, CreateTaskRequest, Task};
use crate::state::auth::AuthState;
use crate::state::board::{BoardState, DropEffect, PendingMove};
use crate::state::form::{FormError, FormStatus, required};
use crate::util::auth::install_unauth_redirect;
use crate::util::dialog::confirm;

/// Which create dialog is open.
#[derive(Clone, Debug, PartialEq, Eq)]
enum BoardDialog {
    AddColumn,
    AddTask(String),
}

/// Board page. Loads `/boards/:id` and re-loads whenever the id changes.
#[component]
pub fn BoardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let board = expect_context::<RwSignal<BoardState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let route_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let load_api = api.clone();
    Effect::new(move || {
        let id = route_id.get();
        if id.is_empty() || !auth.get_untracked().is_authenticated() {
            return;
        }
        load_board(load_api.clone(), board, route_id, id);
    });
    on_cleanup(move || board.update(BoardState::clear));

    let column_ids = Memo::new(move |_| {
        board.with(|s| {
            s.board
                .as_ref()
                .map(|b| b.columns.iter().map(|c| c.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let dialog = RwSignal::new(None::<BoardDialog>);
    let form = RwSignal::new(FormStatus::default());
    let open_dialog = move |next: BoardDialog| {
        form.set(FormStatus::default());
        dialog.set(Some(next));
    };
    let close_dialog = Callback::new(move |()| dialog.set(None));

    // ---------------------------------------------------------------------
    // Drag and drop
    // ---------------------------------------------------------------------

    let move_api = api.clone();
    let on_drop = Callback::new(move |(column_id, index): (String, usize)| {
        let effect = board.try_update(|s| s.drop_task(&column_id, index)).unwrap_or(DropEffect::Ignored);
        if let DropEffect::Moved(pending) = effect {
            persist_move(move_api.clone(), board, pending);
        }
    });

    // ---------------------------------------------------------------------
    // Create
    // ---------------------------------------------------------------------

    let on_add_column = move |_| open_dialog(BoardDialog::AddColumn);
    let on_add_task = Callback::new(move |column_id: String| open_dialog(BoardDialog::AddTask(column_id)));

    let column_api = api.clone();
    let on_submit_column = Callback::new(move |(name, _): (String, String)| {
        let name = match required("Column name", &name) {
            Ok(name) => name,
            Err(err) => {
                form.update(|s| s.reject(err));
                return;
            }
        };
        let Some((board_id, position)) =
            board.with_untracked(|s| Some((s.board_id()?.to_owned(), s.next_column_position()?)))
        else {
            return;
        };
        if !form.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }
        let api = column_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_column(&board_id, &name, position).await;
            if let Err(err) = &result {
                leptos::logging::warn!("failed to create column on board {board_id}: {err}");
            }
            if let Some(column) = form.try_update(|s| s.finish(result)).flatten() {
                board.update(|s| {
                    s.append_column(&board_id, column);
                });
                dialog.set(None);
            }
        });
    });

    let task_api = api.clone();
    let on_submit_task = Callback::new(move |(column_id, title, description): (String, String, String)| {
        let Some((board_id, position)) =
            board.with_untracked(|s| Some((s.board_id()?.to_owned(), s.next_task_position(&column_id)?)))
        else {
            return;
        };
        let request = match new_task_request(&title, &description, position) {
            Ok(request) => request,
            Err(err) => {
                form.update(|s| s.reject(err));
                return;
            }
        };
        if !form.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }
        let api = task_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_task(&board_id, &column_id, &request).await;
            if let Err(err) = &result {
                leptos::logging::warn!("failed to create task in column {column_id}: {err}");
            }
            if let Some(task) = form.try_update(|s| s.finish(result)).flatten() {
                board.update(|s| {
                    s.append_task(&board_id, &column_id, task);
                });
                dialog.set(None);
            }
        });
    });

    // ---------------------------------------------------------------------
    // Delete
    // ---------------------------------------------------------------------

    let delete_task_api = api.clone();
    let on_delete_task = Callback::new(move |(column_id, task_id): (String, String)| {
        if !confirm("Delete this task?") {
            return;
        }
        let Some(board_id) = board.with_untracked(|s| s.board_id().map(str::to_owned)) else {
            return;
        };
        let api = delete_task_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_task(&board_id, &column_id, &task_id).await;
            if let Err(err) = &result {
                leptos::logging::warn!("failed to delete task {task_id}: {err}");
            }
            board.update(|s| {
                apply_task_delete(s, &board_id, &column_id, &task_id, &result);
            });
        });
    });

    let delete_column_api = api.clone();
    let on_delete_column = Callback::new(move |column_id: String| {
        if !confirm("Delete this column and all of its tasks?") {
            return;
        }
        let Some(board_id) = board.with_untracked(|s| s.board_id().map(str::to_owned)) else {
            return;
        };
        let api = delete_column_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_column(&board_id, &column_id).await;
            if let Err(err) = &result {
                leptos::logging::warn!("failed to delete column {column_id}: {err}");
            }
            board.update(|s| {
                apply_column_delete(s, &board_id, &column_id, &result);
            });
        });
    });

    // ---------------------------------------------------------------------
    // Rename
    // ---------------------------------------------------------------------

    let editing = RwSignal::new(false);
    let draft = RwSignal::new(String::new());
    let start_edit = move |_| {
        draft.set(board.with_untracked(|s| s.board.as_ref().map(|b| b.name.clone()).unwrap_or_default()));
        editing.set(true);
    };

    let rename_api = api.clone();
    let on_rename = Callback::new(move |()| {
        // Enter removes the input, which can fire a trailing blur.
        if !editing.get_untracked() {
            return;
        }
        editing.set(false);
        let Some((board_id, current)) =
            board.with_untracked(|s| s.board.as_ref().map(|b| (b.id.clone(), b.name.clone())))
        else {
            return;
        };
        let Ok(Some(patch)) = rename_patch(&current, &draft.get_untracked()) else {
            return;
        };
        let api = rename_api.clone();
        leptos::task::spawn_local(async move {
            match api.update_board(&board_id, &patch).await {
                Ok(updated) => board.update(|s| {
                    s.apply_board_update(&updated);
                }),
                Err(err) => leptos::logging::warn!("failed to rename board {board_id}: {err}"),
            }
        });
    });

    let on_back = move |_| navigate("/boards", NavigateOptions::default());

    let title = move || {
        if editing.get() {
            view! {
                <input
                    class="board-page__title-input"
                    type="text"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:blur=move |_| on_rename.run(())
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => {
                            ev.prevent_default();
                            on_rename.run(());
                        }
                        "Escape" => editing.set(false),
                        _ => {}
                    }
                />
            }
            .into_any()
        } else {
            view! {
                <h1 class="board-page__title" title="Click to rename" on:click=start_edit>
                    {move || board.with(|s| s.board.as_ref().map(|b| b.name.clone()).unwrap_or_default())}
                </h1>
            }
            .into_any()
        }
    };

    let dialog_view = move || {
        dialog.get().map(|open| match open {
            BoardDialog::AddColumn => view! {
                <EntryDialog
                    heading="Add Column"
                    label="Column Name"
                    status=form
                    on_submit=on_submit_column
                    on_close=close_dialog
                />
            }
            .into_any(),
            BoardDialog::AddTask(column_id) => view! {
                <EntryDialog
                    heading="Add Task"
                    label="Title"
                    with_description=true
                    status=form
                    on_submit=Callback::new(move |(title, description): (String, String)| {
                        on_submit_task.run((column_id.clone(), title, description));
                    })
                    on_close=close_dialog
                />
            }
            .into_any(),
        })
    };

    view! {
        <div class="board-page">
            <header class="board-page__header toolbar">
                <button class="btn toolbar__back" on:click=on_back>
                    "← Boards"
                </button>
                {title}
                <span class="toolbar__spacer"></span>
                <button class="btn btn--primary toolbar__add-column" on:click=on_add_column>
                    "+ Add Column"
                </button>
            </header>

            <Show when=move || board.with(|s| s.error.is_some())>
                <p class="board-page__error">{move || board.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || board.with(|s| s.loading && s.board.is_none())>
                <p class="board-page__loading">"Loading board..."</p>
            </Show>

            <div class="board-page__columns">
                <For
                    each=move || column_ids.get()
                    key=String::clone
                    children=move |column_id| {
                        view! {
                            <BoardColumn
                                column_id=column_id
                                on_drop=on_drop
                                on_add_task=on_add_task
                                on_delete_task=on_delete_task
                                on_delete_column=on_delete_column
                            />
                        }
                    }
                />
            </div>

            {dialog_view}
        </div>
    }
}

/// Fetch `board_id` into `board`, unless the route moved on meanwhile.
fn load_board(api: ApiClient, board: RwSignal<BoardState>, route_id: Memo<String>, board_id: String) {
    board.update(|s| s.begin_load(&board_id));
    leptos::task::spawn_local(async move {
        let result = api.get_board(&board_id).await;
        if route_id.try_get_untracked().as_deref() != Some(board_id.as_str()) {
            return;
        }
        match result {
            Ok(loaded) => board.update(|s| s.finish_load(loaded)),
            Err(err) => {
                leptos::logging::warn!("failed to load board {board_id}: {err}");
                board.update(|s| s.fail_load(err.user_message("Failed to load board.")));
            }
        }
    });
}

/// Confirm an optimistic cross-column move, rolling it back on rejection.
fn persist_move(api: ApiClient, board: RwSignal<BoardState>, pending: PendingMove) {
    leptos::task::spawn_local(async move {
        let request = pending.request();
        let result = api
            .move_task(&pending.board_id, &pending.source_column_id, &pending.task_id, &request)
            .await;
        if let Err(err) = &result {
            leptos::logging::warn!("move of task {} rejected, rolling back: {err}", pending.task_id);
        }
        board.update(|s| {
            apply_move_result(s, &pending, &result);
        });
    });
}

/// Settle a move request. Acceptance keeps the optimistic state; rejection
/// rolls it back. Returns whether a rollback happened.
fn apply_move_result(state: &mut BoardState, pending: &PendingMove, result: &Result<Task, ApiError>) -> bool {
    result.is_err() && state.rollback_move(pending)
}

/// Settle a task delete. The entry is removed only once the server agreed.
fn apply_task_delete(
    state: &mut BoardState,
    board_id: &str,
    column_id: &str,
    task_id: &str,
    result: &Result<(), ApiError>,
) -> bool {
    result.is_ok() && state.remove_task(board_id, column_id, task_id).is_some()
}

/// Settle a column delete, same policy as tasks.
fn apply_column_delete(state: &mut BoardState, board_id: &str, column_id: &str, result: &Result<(), ApiError>) -> bool {
    result.is_ok() && state.remove_column(board_id, column_id).is_some()
}

/// Title is required; a blank description is sent as `""`.
fn new_task_request(title: &str, description: &str, position: i32) -> Result<CreateTaskRequest, FormError> {
    Ok(CreateTaskRequest {
        title: required("Title", title)?,
        description: description.trim().to_owned(),
        position,
    })
}

/// Patch for a rename, or `None` when the name did not change.
fn rename_patch(current: &str, draft: &str) -> Result<Option<BoardPatch>, FormError> {
    let name = required("Board name", draft)?;
    if name == current {
        return Ok(None);
    }
    Ok(Some(BoardPatch { name: Some(name), ..BoardPatch::default() }))
}

/// Modal dialog collecting a required name and an optional description.
#[component]
fn EntryDialog(
    heading: &'static str,
    label: &'static str,
    #[prop(optional)] with_description: bool,
    status: RwSignal<FormStatus>,
    on_submit: Callback<(String, String)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let value = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let submit = move || on_submit.run((value.get_untracked(), description.get_untracked()));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <label class="dialog__label">
                    {label}
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
                </label>
                {with_description
                    .then(|| {
                        view! {
                            <label class="dialog__label">
                                "Description"
                                <textarea
                                    class="dialog__input"
                                    rows="3"
                                    prop:value=move || description.get()
                                    on:input=move |ev| description.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                        }
                    })}
                <Show when=move || status.get().error.is_some()>
                    <p class="dialog__error">{move || status.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || status.get().loading
                        on:click=move |_| submit()
                    >
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

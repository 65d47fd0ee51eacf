//! Board list page with create, delete, and open actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the board inventory on
//! activation and mirrors confirmed create/delete responses into
//! `BoardsState`. Neither mutation is optimistic.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::board_card::BoardCard;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::Board;
use crate::state::auth::AuthState;
use crate::state::boards::BoardsState;
use crate::state::form::{FormError, FormStatus, optional, required};
use crate::util::auth::install_unauth_redirect;
use crate::util::dialog::confirm;

/// Board list page. Redirects to `/login` if no token is present.
#[component]
pub fn BoardsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let boards = expect_context::<RwSignal<BoardsState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    if auth.get_untracked().is_authenticated() {
        load_boards(api.clone(), boards);
    }

    let show_create = RwSignal::new(false);
    let on_create = move |_| show_create.set(true);
    let on_create_close = Callback::new(move |()| show_create.set(false));

    let delete_api = api.clone();
    let on_board_delete = Callback::new(move |id: String| {
        if !confirm("Delete this board and everything on it?") {
            return;
        }
        let api = delete_api.clone();
        leptos::task::spawn_local(async move {
            match api.delete_board(&id).await {
                Ok(()) => {
                    boards.update(|s| {
                        s.remove(&id);
                    });
                }
                Err(err) => leptos::logging::warn!("failed to delete board {id}: {err}"),
            }
        });
    });

    // The unauth redirect above handles navigation to `/login`.
    let on_logout = move |_| {
        crate::util::auth::logout(auth);
        boards.set(BoardsState::default());
    };

    let user_label = move || auth.get().user.map(|u| u.display_name()).unwrap_or_default();

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <div class="boards-page"><p>"Redirecting to login..."</p></div> }
        >
            <div class="boards-page">
                <header class="boards-page__header toolbar">
                    <span class="toolbar__title">"Boards"</span>
                    <button class="btn toolbar__new-board" on:click=on_create>
                        "+ New Board"
                    </button>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{user_label}</span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <div class="boards-page__grid">
                    <Show when=move || boards.get().error.is_some()>
                        <p class="boards-page__error">{move || boards.get().error.unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || boards.get().loading>
                        <p class="boards-page__loading">"Loading boards..."</p>
                    </Show>
                    <Show when=move || boards.get().is_empty()>
                        <p class="boards-page__empty">"No boards yet. Create one to get started."</p>
                    </Show>
                    <div class="boards-page__cards">
                        <For
                            each=move || boards.get().items
                            key=|b| b.id.clone()
                            children=move |b| view! { <BoardCard board=b on_delete=on_board_delete/> }
                        />
                    </div>
                </div>

                <Show when=move || show_create.get()>
                    <CreateBoardDialog on_close=on_create_close/>
                </Show>
            </div>
        </Show>
    }
}

/// Fetch the board list into `boards`.
fn load_boards(api: ApiClient, boards: RwSignal<BoardsState>) {
    boards.update(BoardsState::begin_load);
    leptos::task::spawn_local(async move {
        match api.list_boards().await {
            Ok(items) => boards.update(|s| s.finish_load(items)),
            Err(err) => {
                leptos::logging::warn!("failed to load boards: {err}");
                boards.update(|s| s.fail_load(err.user_message("Failed to load boards.")));
            }
        }
    });
}

/// Modal dialog for creating a new board.
#[component]
fn CreateBoardDialog(on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let boards = expect_context::<RwSignal<BoardsState>>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let submit = Callback::new(move |()| {
        let (board_name, board_description) =
            match validate_new_board_input(&name.get_untracked(), &description.get_untracked()) {
                Ok(values) => values,
                Err(err) => {
                    status.update(|s| s.reject(err));
                    return;
                }
            };
        if !status.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_board(&board_name, board_description.as_deref()).await;
            if let Err(err) = &result {
                leptos::logging::warn!("failed to create board: {err}");
            }
            let created = status
                .try_update(|form| boards.try_update(|list| apply_create_result(list, form, result)))
                .flatten()
                .unwrap_or(false);
            if created {
                on_close.run(());
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Board"</h2>
                <label class="dialog__label">
                    "Board Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
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
                        on:click=move |_| submit.run(())
                    >
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Name is required; a blank description is sent as absent.
fn validate_new_board_input(name: &str, description: &str) -> Result<(String, Option<String>), FormError> {
    Ok((required("Board name", name)?, optional(description)))
}

/// Mirror a finished create into the list. Returns whether a board was added.
fn apply_create_result(boards: &mut BoardsState, status: &mut FormStatus, result: Result<Board, ApiError>) -> bool {
    let Some(board) = status.finish(result) else {
        return false;
    };
    leptos::logging::log!("created board {}", board.id);
    boards.prepend(board);
    true
}

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

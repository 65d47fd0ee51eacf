//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{board::BoardPage, boards::BoardsPage, login::LoginPage, register::RegisterPage};
use crate::state::{board::BoardState, boards::BoardsState};
use crate::util::auth::browser_session;

/// Root application component.
///
/// Provides the API client and all shared state contexts, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = ApiClient::new(&config);
    log::debug!("api base url: {}", config.api_base_url);

    // Token presence is known at startup; the user is not until next login.
    let auth = RwSignal::new(browser_session().restore());
    let boards = RwSignal::new(BoardsState::default());
    let board = RwSignal::new(BoardState::default());

    provide_context(config);
    provide_context(api);
    provide_context(auth);
    provide_context(boards);
    provide_context(board);

    view! {
        <Title text="Kanban"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/boards"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("boards") view=BoardsPage/>
                <Route path=(StaticSegment("boards"), ParamSegment("id")) view=BoardPage/>
            </Routes>
        </Router>
    }
}

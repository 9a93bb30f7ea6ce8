//! Top navigation for signed-in pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::{AppRoute, LOGIN_PATH};
use crate::state::session::SessionStore;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let display_name = {
        let session = session.clone();
        move || session.identity().map(|i| i.display_name).unwrap_or_default()
    };

    let on_logout = move |_| {
        session.evict();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <A href=AppRoute::MyGames.path()>"My Games"</A>
            <A href=AppRoute::Wishlist.path()>"Wishlist"</A>
            <A href=AppRoute::Plays.path()>"Plays"</A>
            <span class="nav-bar__user">{display_name}</span>
            <button class="btn nav-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::Guarded;
use crate::config::ApiConfig;
use crate::net::channel::ApiChannel;
use crate::net::transport::FetchTransport;
use crate::pages::{
    login::LoginPage, my_games::MyGamesPage, plays::PlaysPage, register::RegisterPage, wishlist::WishlistPage,
};
use crate::routes::AppRoute;
use crate::state::session::SessionStore;
use crate::util::browser::hard_redirect;

/// Root application component.
///
/// Restores the session from `localStorage`, wires the request pipeline to
/// it with a full-page redirect on credential rejection, and provides both
/// to the route tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::browser();
    let channel: ApiChannel = ApiChannel::new(session.clone(), FetchTransport, ApiConfig::default(), hard_redirect);

    provide_context(session);
    provide_context(channel);

    view! {
        <Title text="Board Game Shelf"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <Guarded route=AppRoute::Login><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <Guarded route=AppRoute::Register><RegisterPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Guarded route=AppRoute::MyGames><MyGamesPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("wishlist")
                    view=|| view! { <Guarded route=AppRoute::Wishlist><WishlistPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("plays")
                    view=|| view! { <Guarded route=AppRoute::Plays><PlaysPage/></Guarded> }
                />
            </Routes>
        </Router>
    }
}

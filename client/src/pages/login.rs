//! Login page with username + password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::auth;
use crate::net::channel::ApiChannel;
use crate::routes::{AppRoute, DEFAULT_PATH};
use crate::util::forms::validate_login_input;

#[component]
pub fn LoginPage() -> impl IntoView {
    let channel = expect_context::<ApiChannel>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&username.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let channel = channel.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::login(&channel.guest(), &request).await {
                Ok(resp) => {
                    auth::sign_in(channel.session(), &resp);
                    navigate(DEFAULT_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {}", e.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Board Game Shelf"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? "
                    <A href=AppRoute::Register.path()>"Register"</A>
                </p>
            </div>
        </div>
    }
}

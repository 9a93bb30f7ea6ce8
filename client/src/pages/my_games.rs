//! "My Games" landing page: the collection with add, delete, and thumbnail upload.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::boardgames;
use crate::net::channel::ApiChannel;
use crate::net::types::UserBoardGame;
use crate::util::forms::validate_new_game;

#[component]
pub fn MyGamesPage() -> impl IntoView {
    let channel = expect_context::<ApiChannel>();

    let games = {
        let channel = channel.clone();
        LocalResource::new(move || {
            let channel = channel.clone();
            async move { boardgames::list(&channel).await }
        })
    };

    let name = RwSignal::new(String::new());
    let min_players = RwSignal::new(String::new());
    let max_players = RwSignal::new(String::new());
    let thumbnail = RwSignal::new(None::<String>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_add = {
        let channel = channel.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let payload = match validate_new_game(&name.get(), &min_players.get(), &max_players.get(), thumbnail.get()) {
                Ok(payload) => payload,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);
            let channel = channel.clone();
            leptos::task::spawn_local(async move {
                match boardgames::add(&channel, &payload).await {
                    Ok(_) => {
                        name.set(String::new());
                        min_players.set(String::new());
                        max_players.set(String::new());
                        thumbnail.set(None);
                        info.set(String::new());
                        games.refetch();
                    }
                    Err(e) => info.set(format!("Could not add game: {}", e.user_message())),
                }
                busy.set(false);
            });
        }
    };

    let on_pick_image = {
        let channel = channel.clone();
        move |ev: leptos::ev::Event| {
            #[cfg(feature = "csr")]
            {
                let channel = channel.clone();
                busy.set(true);
                info.set("Uploading image...".to_owned());
                leptos::task::spawn_local(async move {
                    let uploaded = match crate::util::browser::read_picked_file(&ev).await {
                        Ok(file) => boardgames::upload_image(&channel, &file.name, &file.content_type, file.bytes)
                            .await
                            .map_err(|e| e.user_message()),
                        Err(e) => Err(e),
                    };
                    match uploaded {
                        Ok(resp) => {
                            thumbnail.set(Some(resp.url));
                            info.set(String::new());
                        }
                        Err(e) => info.set(format!("Upload failed: {e}")),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&channel, ev);
            }
        }
    };

    let on_delete = Callback::new(move |id: i64| {
        let channel = channel.clone();
        leptos::task::spawn_local(async move {
            match boardgames::delete(&channel, id).await {
                Ok(()) => games.refetch(),
                Err(e) => info.set(format!("Could not delete game: {}", e.user_message())),
            }
        });
    });

    view! {
        <NavBar/>
        <div class="games-page">
            <h1>"My Games"</h1>
            <form class="games-page__form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Game name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Min players"
                    prop:value=move || min_players.get()
                    on:input=move |ev| min_players.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Max players"
                    prop:value=move || max_players.get()
                    on:input=move |ev| max_players.set(event_target_value(&ev))
                />
                <input type="file" accept="image/*" on:change=on_pick_image/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="games-page__message">{move || info.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading games..."</p> }>
                {move || {
                    games
                        .get()
                        .map(|result| match result {
                            Ok(listing) => {
                                view! {
                                    <ul class="games-page__list">
                                        {listing
                                            .into_items()
                                            .into_iter()
                                            .map(|game| view! { <GameRow game=game on_delete=on_delete/> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="games-page__error">{e.user_message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn GameRow(game: UserBoardGame, on_delete: Callback<i64>) -> impl IntoView {
    let id = game.id;
    let details = [game.players_label().map(|p| format!("{p} players")), game.play_time_label().map(|t| format!("{t} min"))]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
    view! {
        <li class="game-row">
            {game.thumbnail_url.map(|url| view! { <img class="game-row__thumb" src=url alt=""/> })}
            <span class="game-row__name">{game.name}</span>
            <span class="game-row__details">{details}</span>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </li>
    }
}

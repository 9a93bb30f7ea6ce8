//! Wishlist page: list, add, and remove wanted games.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::channel::ApiChannel;
use crate::net::wishlist;
use crate::util::forms::validate_wishlist_item;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let channel = expect_context::<ApiChannel>();

    let items = {
        let channel = channel.clone();
        LocalResource::new(move || {
            let channel = channel.clone();
            async move { wishlist::list(&channel).await }
        })
    };

    let name = RwSignal::new(String::new());
    let thumbnail_url = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_add = {
        let channel = channel.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let payload = match validate_wishlist_item(&name.get(), &thumbnail_url.get()) {
                Ok(payload) => payload,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
            let channel = channel.clone();
            leptos::task::spawn_local(async move {
                match wishlist::add(&channel, &payload).await {
                    Ok(_) => {
                        name.set(String::new());
                        thumbnail_url.set(String::new());
                        info.set(String::new());
                        items.refetch();
                    }
                    Err(e) => info.set(format!("Could not add item: {}", e.user_message())),
                }
            });
        }
    };

    let on_delete = Callback::new(move |id: i64| {
        let channel = channel.clone();
        leptos::task::spawn_local(async move {
            match wishlist::delete(&channel, id).await {
                Ok(()) => items.refetch(),
                Err(e) => info.set(format!("Could not remove item: {}", e.user_message())),
            }
        });
    });

    view! {
        <NavBar/>
        <div class="wishlist-page">
            <h1>"Wishlist"</h1>
            <form class="wishlist-page__form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Game name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="url"
                    placeholder="Image URL (optional)"
                    prop:value=move || thumbnail_url.get()
                    on:input=move |ev| thumbnail_url.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Add"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="wishlist-page__message">{move || info.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading wishlist..."</p> }>
                {move || {
                    items
                        .get()
                        .map(|result| match result {
                            Ok(listing) => {
                                view! {
                                    <ul class="wishlist-page__list">
                                        {listing
                                            .into_items()
                                            .into_iter()
                                            .map(|item| {
                                                let id = item.id;
                                                view! {
                                                    <li class="wishlist-row">
                                                        {item
                                                            .thumbnail_url
                                                            .map(|url| view! { <img class="wishlist-row__thumb" src=url alt=""/> })}
                                                        <span class="wishlist-row__name">{item.name}</span>
                                                        <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                                                            "Remove"
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="wishlist-page__error">{e.user_message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

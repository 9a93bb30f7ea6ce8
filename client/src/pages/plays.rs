//! Play history across the whole collection, one page at a time.

#[cfg(test)]
#[path = "plays_test.rs"]
mod plays_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::channel::ApiChannel;
use crate::net::plays;
use crate::net::types::{PageRequest, PlayRecord};

const PAGE_SIZE: u32 = 20;

fn play_summary(play: &PlayRecord) -> String {
    let mut summary = play.played_at.clone();
    if let Some(count) = play.player_count {
        summary.push_str(&format!(" · {count} players"));
    }
    if let Some(memo) = play.memo.as_deref().filter(|m| !m.is_empty()) {
        summary.push_str(" · ");
        summary.push_str(memo);
    }
    summary
}

#[component]
pub fn PlaysPage() -> impl IntoView {
    let channel = expect_context::<ApiChannel>();
    let page = RwSignal::new(0_u32);

    let records = LocalResource::new(move || {
        let channel = channel.clone();
        let request = PageRequest { page: Some(page.get()), size: Some(PAGE_SIZE) };
        async move { plays::list_all(&channel, request).await }
    });

    view! {
        <NavBar/>
        <div class="plays-page">
            <h1>"Play Records"</h1>
            <Suspense fallback=move || view! { <p>"Loading plays..."</p> }>
                {move || {
                    records
                        .get()
                        .map(|result| match result {
                            Ok(listing) => {
                                let (index, pages) = listing.position();
                                let has_prev = listing.has_previous();
                                let has_next = listing.has_next();
                                let total = listing.total();
                                view! {
                                    <p class="plays-page__total">{format!("{total} plays")}</p>
                                    <ul class="plays-page__list">
                                        {listing
                                            .into_items()
                                            .iter()
                                            .map(|play| view! { <li class="play-row">{play_summary(play)}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                    <div class="plays-page__pager">
                                        <button
                                            class="btn"
                                            disabled=!has_prev
                                            on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                                        >
                                            "Previous"
                                        </button>
                                        <span>{format!("{} / {}", index + 1, pages.max(1))}</span>
                                        <button class="btn" disabled=!has_next on:click=move |_| page.update(|p| *p += 1)>
                                            "Next"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="plays-page__error">{e.user_message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
